use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::namespace::tree::{Namespace, NamespaceError};

/// A [`Namespace`] behind one tree-wide reader/writer lock.
///
/// Reads (`list`, `read_file`) share the lock; mutations
/// (`create_directory`, `append_file`) take it exclusively. Every operation
/// is a bounded synchronous walk, so no call holds the lock across I/O or
/// suspension. Results are returned by value since borrows cannot outlive
/// the guard.
///
/// A poisoned lock is recovered rather than propagated: each operation
/// either completes or leaves the tree in a state it could have reached
/// through a shorter sequence of calls, so the tree invariants hold even
/// after a panicking caller.
#[derive(Debug, Default)]
pub struct SharedNamespace {
    inner: RwLock<Namespace>,
}

impl SharedNamespace {
    pub fn new() -> Self {
        SharedNamespace {
            inner: RwLock::new(Namespace::new()),
        }
    }

    pub fn list(&self, path: &str) -> Result<Vec<String>, NamespaceError> {
        self.read().list(path)
    }

    pub fn create_directory(&self, path: &str) -> Result<(), NamespaceError> {
        self.write().create_directory(path)
    }

    pub fn append_file(&self, path: &str, content: &str) -> Result<(), NamespaceError> {
        self.write().append_file(path, content)
    }

    pub fn read_file(&self, path: &str) -> Result<String, NamespaceError> {
        self.read().read_file(path).map(str::to_owned)
    }

    fn read(&self) -> RwLockReadGuard<'_, Namespace> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Namespace> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
