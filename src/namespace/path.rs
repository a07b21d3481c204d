/// Splits a path into the segments a tree walk visits.
///
/// The rules mirror a permissive split on `/`: the token before the first
/// separator (empty for a well-formed absolute path) is skipped, trailing
/// empty tokens are dropped, and interior empty tokens are kept and treated
/// as ordinary names. No normalization or validation happens here: `"/"`,
/// `""`, and a path without a leading separator all yield whatever the split
/// yields.
pub fn segments(path: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = path.split('/').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    if !tokens.is_empty() {
        tokens.remove(0);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("/a/b/c", vec!["a", "b", "c"])]
    #[case("/a", vec!["a"])]
    #[case("/", vec![])]
    #[case("", vec![])]
    #[case("/a/", vec!["a"])]
    #[case("/a///", vec!["a"])]
    #[case("/a//b", vec!["a", "", "b"])]
    #[case("a/b", vec!["b"])]
    #[case("//", vec![])]
    fn splits_and_skips_the_leading_token(#[case] path: &str, #[case] expected: Vec<&str>) {
        assert_eq!(segments(path), expected);
    }
}
