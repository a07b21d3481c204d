//! An in-memory hierarchical namespace that emulates a minimal filesystem:
//! directories with named children, append-only files, and `/`-separated
//! path addressing with on-demand creation of intermediate directories.
//!
//! ```
//! use memns::Namespace;
//!
//! let mut ns = Namespace::new();
//! ns.append_file("/notes/todo.txt", "ship it").unwrap();
//! assert_eq!(ns.list("/notes").unwrap(), vec!["todo.txt"]);
//! assert_eq!(ns.read_file("/notes/todo.txt").unwrap(), "ship it");
//! ```

mod filter;
mod namespace;

pub use filter::{ListingFilter, NameFilter};
pub use namespace::{Namespace, NamespaceError, Node, NodeKind, SharedNamespace};
