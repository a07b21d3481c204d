use std::collections::BTreeMap;

use derive_more::Display;

/// A single node of the namespace tree.
///
/// Directories own their children by value, keyed by child name; files own
/// their accumulated content. Names live in the parent's map, so the root
/// (which has no parent) is simply a nameless directory. A node's variant is
/// fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory { children: BTreeMap<String, Node> },
    File { content: String },
}

/// The variant of a [`Node`], for reporting and error messages.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    #[display("directory")]
    Directory,
    #[display("file")]
    File,
}

impl Node {
    pub fn directory() -> Self {
        Node::Directory {
            children: BTreeMap::new(),
        }
    }

    pub fn file() -> Self {
        Node::File {
            content: String::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Directory { .. } => NodeKind::Directory,
            Node::File { .. } => NodeKind::File,
        }
    }

    /// Looks up a direct child by exact name. Files have no children, so a
    /// lookup on a file always misses.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Directory { children } => children.get(name),
            Node::File { .. } => None,
        }
    }
}
