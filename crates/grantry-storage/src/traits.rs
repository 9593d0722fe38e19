//! Seams between the engine and a document store.

use async_trait::async_trait;
use grantry_core::Result;
use serde_json::{Map, Value};

use crate::query::Query;

/// Which kind of write a hook is observing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteKind {
    /// The document is being created.
    Create,
    /// An existing document is being modified.
    Update,
}

impl WriteKind {
    /// Whether the document is new.
    pub fn is_new(&self) -> bool {
        matches!(self, WriteKind::Create)
    }
}

/// A hook that runs before a document is persisted.
///
/// Hooks may edit the in-flight document. Returning an error aborts the
/// write; nothing is persisted.
pub trait WriteHook: Send + Sync {
    /// Inspect and possibly edit `doc` before it is written.
    fn before_write(&self, doc: &mut Value, kind: WriteKind) -> Result<()>;
}

/// A query builder whose filter conditions can be edited before execution.
pub trait QueryConditions {
    /// The current conditions.
    fn conditions(&self) -> &Map<String, Value>;

    /// Mutable access to the conditions.
    fn conditions_mut(&mut self) -> &mut Map<String, Value>;
}

/// An asynchronous document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document, returning it as persisted.
    async fn insert(&self, doc: Value) -> Result<Value>;

    /// Replace an existing document (matched by id), returning it as persisted.
    async fn save(&self, doc: Value) -> Result<Value>;

    /// Fetch a document by id.
    async fn get(&self, id: &str) -> Result<Option<Value>>;

    /// Return every document matching the query's conditions.
    async fn find(&self, query: &Query) -> Result<Vec<Value>>;
}
