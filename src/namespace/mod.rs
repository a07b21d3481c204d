//! In-memory hierarchical namespace.
//!
//! The namespace is a tree of nodes, where a node is either a directory
//! (owning named children) or a file (owning an append-only content buffer).
//! Slash-separated paths address nodes; listing, directory creation, file
//! append and file read are the only operations, and the mutating ones
//! create missing intermediate directories on the way down.

mod node;
mod path;
mod shared;
mod tree;

pub use node::{Node, NodeKind};
pub use shared::SharedNamespace;
pub use tree::{Namespace, NamespaceError};
