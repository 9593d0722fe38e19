//! In-memory document collection.
//!
//! [`MemoryCollection`] is a small [`DocumentStore`] that runs registered
//! [`WriteHook`]s before every write and keeps ids unique. It is used to
//! exercise the engine end to end without a database.
//!
//! ```
//! use grantry_storage::{DocumentStore, MemoryCollection, Query};
//! use serde_json::json;
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! rt.block_on(async {
//!     let articles = MemoryCollection::new("articles");
//!     articles.insert(json!({"title": "Hello"})).await.unwrap();
//!     let found = articles.find(&Query::new()).await.unwrap();
//!     assert_eq!(found.len(), 1);
//! });
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use grantry_core::{Error, Result, identity_string};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::query::Query;
use crate::traits::{DocumentStore, WriteHook, WriteKind};

/// Identifier field assigned to inserted documents.
pub const ID_FIELD: &str = "_id";

/// A named collection of JSON documents held in memory.
pub struct MemoryCollection {
    name: String,
    hooks: Vec<Arc<dyn WriteHook>>,
    docs: RwLock<Vec<Value>>,
}

impl MemoryCollection {
    /// Create an empty collection with no hooks.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Vec::new(),
            docs: RwLock::new(Vec::new()),
        }
    }

    /// Register a hook that runs before every write, in registration order.
    pub fn with_hook(mut self, hook: Arc<dyn WriteHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    /// Insert several documents, stopping at the first rejected write.
    ///
    /// Documents inserted before the failure stay persisted.
    pub async fn insert_many<I>(&self, docs: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = Value> + Send,
        I::IntoIter: Send,
    {
        let mut inserted = Vec::new();
        for doc in docs {
            inserted.push(self.insert(doc).await?);
        }
        Ok(inserted)
    }

    fn run_hooks(&self, doc: &mut Value, kind: WriteKind) -> Result<()> {
        for hook in &self.hooks {
            hook.before_write(doc, kind)?;
        }
        Ok(())
    }
}

fn document_id(doc: &Value) -> Option<String> {
    doc.get(ID_FIELD).and_then(identity_string)
}

#[async_trait]
impl DocumentStore for MemoryCollection {
    async fn insert(&self, mut doc: Value) -> Result<Value> {
        let Value::Object(map) = &mut doc else {
            return Err(Error::invalid_document("document root must be an object"));
        };
        if !map.contains_key(ID_FIELD) {
            let id = uuid::Uuid::new_v4().simple().to_string();
            map.insert(ID_FIELD.to_string(), Value::String(id));
        }

        self.run_hooks(&mut doc, WriteKind::Create)?;

        let id = document_id(&doc);
        let mut docs = self.docs.write().await;
        if let Some(id) = &id {
            if docs.iter().any(|stored| document_id(stored).as_ref() == Some(id)) {
                return Err(Error::conflict(id.as_str()));
            }
        }
        docs.push(doc.clone());
        log::debug!("{}: inserted document {id:?}", self.name);
        Ok(doc)
    }

    async fn save(&self, mut doc: Value) -> Result<Value> {
        let id = document_id(&doc)
            .ok_or_else(|| Error::invalid_document("saved document has no identifier"))?;

        if self.get(&id).await?.is_none() {
            return Err(Error::not_found(id));
        }

        self.run_hooks(&mut doc, WriteKind::Update)?;

        let mut docs = self.docs.write().await;
        match docs
            .iter_mut()
            .find(|stored| document_id(stored).as_deref() == Some(id.as_str()))
        {
            Some(slot) => *slot = doc.clone(),
            None => return Err(Error::not_found(id)),
        }
        log::debug!("{}: saved document {id}", self.name);
        Ok(doc)
    }

    async fn get(&self, id: &str) -> Result<Option<Value>> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .find(|doc| document_id(doc).as_deref() == Some(id))
            .cloned())
    }

    async fn find(&self, query: &Query) -> Result<Vec<Value>> {
        let docs = self.docs.read().await;
        Ok(docs.iter().filter(|doc| query.matches(doc)).cloned().collect())
    }
}

impl fmt::Debug for MemoryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCollection")
            .field("name", &self.name)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
