use tracing::debug;

/// Selects names out of a listing.
///
/// Filters are stateless predicates over individual names; `filter` applies
/// the predicate across a whole listing, preserving the input order.
pub trait ListingFilter {
    fn matches(&self, name: &str) -> bool;

    fn filter(&self, names: &[String]) -> Vec<String> {
        names
            .iter()
            .filter(|name| self.matches(name))
            .cloned()
            .collect()
    }
}

/// Keeps exactly the names equal to a fixed name.
#[derive(Debug, Clone)]
pub struct NameFilter {
    name: String,
}

impl NameFilter {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Created name filter for: {name}");
        NameFilter { name }
    }
}

impl ListingFilter for NameFilter {
    fn matches(&self, name: &str) -> bool {
        name == self.name
    }
}
