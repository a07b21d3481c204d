use snafu::Snafu;
use tracing::{debug, warn};

use crate::namespace::node::{Node, NodeKind};
use crate::namespace::path::segments;

/// An in-memory hierarchical namespace.
///
/// One root directory owns the whole tree. Paths are `/`-separated strings
/// resolved with the permissive split of [`segments`]; intermediate
/// directories are created on demand by the mutating operations and nodes
/// are never deleted or renamed. Listing order is lexicographic by name.
///
/// The tree itself is single-threaded (`&mut self` for mutation); wrap it in
/// a [`SharedNamespace`](crate::namespace::SharedNamespace) when concurrent
/// callers are involved.
#[derive(Debug, Clone)]
pub struct Namespace {
    root: Node,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    /// Creates an empty namespace: a root directory with no children.
    pub fn new() -> Self {
        Namespace {
            root: Node::directory(),
        }
    }

    /// Lists the node at `path`: the child names of a directory in
    /// lexicographic order, or the file's own name for a file (the way `ls`
    /// treats a file argument).
    pub fn list(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        let node = self.resolve(path)?;
        match node {
            Node::Directory { children } => Ok(children.keys().cloned().collect()),
            Node::File { .. } => {
                // The file's name is the last segment the walk consumed.
                let name = segments(path).last().copied().unwrap_or_default();
                Ok(vec![name.to_owned()])
            }
        }
    }

    /// Creates the directory at `path`, along with any missing intermediate
    /// directories. Existing nodes along the walk are reused as-is, so the
    /// call is idempotent.
    pub fn create_directory(&mut self, path: &str) -> Result<(), NamespaceError> {
        debug!("Creating directory path: {path}");
        self.walk_create(path, NodeKind::Directory)?;
        Ok(())
    }

    /// Appends `content` to the file at `path`, creating the file and any
    /// missing intermediate directories first. Content accumulates in call
    /// order and is never truncated.
    ///
    /// Known looseness of the permissive-reuse policy: if the terminal node
    /// already exists as a directory it is reused as-is and the content is
    /// dropped with a warning rather than an error.
    pub fn append_file(&mut self, path: &str, content: &str) -> Result<(), NamespaceError> {
        debug!("Appending {} bytes to: {path}", content.len());
        let terminal = self.walk_create(path, NodeKind::File)?;
        match terminal {
            Node::File { content: buffer } => buffer.push_str(content),
            Node::Directory { .. } => {
                warn!("Append target {path} is a directory; content dropped");
            }
        }
        Ok(())
    }

    /// Reads the full accumulated content of the file at `path`.
    pub fn read_file(&self, path: &str) -> Result<&str, NamespaceError> {
        match self.resolve(path)? {
            Node::File { content } => Ok(content),
            Node::Directory { .. } => InvalidOperationSnafu {
                path,
                kind: NodeKind::Directory,
            }
            .fail(),
        }
    }

    /// Walks `path` from the root without creating anything, failing fast on
    /// the first segment that has no matching child. A file encountered with
    /// segments still remaining misses for the same reason: files have no
    /// children.
    fn resolve(&self, path: &str) -> Result<&Node, NamespaceError> {
        let mut current = &self.root;
        for segment in segments(path) {
            current = current
                .child(segment)
                .ok_or_else(|| NotFoundSnafu { path }.build())?;
        }
        Ok(current)
    }

    /// Walks `path` creating missing nodes: directories for intermediate
    /// segments, `terminal_kind` for the last one. An existing child of
    /// either variant is descended into without a type check (the permissive
    /// reuse policy); the walk only fails when it has to descend *through* a
    /// file, which cannot hold children.
    fn walk_create(
        &mut self,
        path: &str,
        terminal_kind: NodeKind,
    ) -> Result<&mut Node, NamespaceError> {
        let mut current = &mut self.root;
        let mut remaining = segments(path).into_iter().peekable();

        while let Some(name) = remaining.next() {
            let is_terminal = remaining.peek().is_none();
            current = match current {
                Node::Directory { children } => {
                    children.entry(name.to_owned()).or_insert_with(|| {
                        match (is_terminal, terminal_kind) {
                            (true, NodeKind::File) => Node::file(),
                            _ => Node::directory(),
                        }
                    })
                }
                Node::File { .. } => {
                    return InvalidOperationSnafu {
                        path,
                        kind: NodeKind::File,
                    }
                    .fail();
                }
            };
        }

        Ok(current)
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum NamespaceError {
    #[snafu(display("No node exists at path '{path}'"))]
    NotFound { path: String },
    #[snafu(display("Operation is not valid on a {kind} at path '{path}'"))]
    InvalidOperation { path: String, kind: NodeKind },
}
