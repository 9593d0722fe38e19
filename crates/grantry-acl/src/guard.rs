//! Write-time grant assignment and validation.
//!
//! [`WriteGuard`] runs before a document is persisted:
//!
//! 1. A new document without grants receives a fresh copy of the default
//!    grants.
//! 2. A modified document without a grants attribute gets an empty list;
//!    defaults are only ever applied to new documents. A single string is
//!    read as a one-item list; other non-list values reject the write.
//! 3. Any required grant missing from the result rejects the write.
//! 4. With author grants enabled, `author-<id>` is appended when the
//!    author's id resolves. This happens after step 3, so an author grant
//!    can never stand in for a missing required grant.

use std::sync::Arc;

use grantry_core::{Error, GrantSet, Result, author_grant, resolve_identity};
use grantry_storage::{WriteHook, WriteKind};
use serde_json::Value;

use crate::policy::AclConfig;

/// Enforces grant invariants on every write.
#[derive(Debug, Clone)]
pub struct WriteGuard {
    config: Arc<AclConfig>,
}

impl WriteGuard {
    /// Create a guard for a resolved configuration.
    pub fn new(config: Arc<AclConfig>) -> Self {
        Self { config }
    }

    /// The configuration this guard enforces.
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// Assign and validate the grants of an in-flight document.
    ///
    /// On error the document's grants are left as they were.
    pub fn apply(&self, doc: &mut Value, kind: WriteKind) -> Result<()> {
        let config = &self.config;
        let field = config.document_grants_field();

        let author_id = if config.add_author_grant() {
            resolve_identity(doc, config.author_id_path())
        } else {
            None
        };

        let Value::Object(map) = doc else {
            return Err(Error::invalid_document("document root must be an object"));
        };

        let current = declared_grants(map.get(field), field)?;
        let mut grants = if kind.is_new() {
            match current {
                Some(grants) if !grants.is_empty() => grants,
                _ => {
                    log::debug!("Assigning default grants {}", config.default_grants());
                    config.default_grants().clone()
                }
            }
        } else {
            current.unwrap_or_default()
        };

        let missing = config.required_grants().difference(&grants);
        if !missing.is_empty() {
            log::debug!("Rejecting write: missing required grants {missing:?}");
            return Err(Error::MissingRequiredGrants { missing });
        }

        if let Some(id) = author_id {
            if grants.insert(author_grant(&id)) {
                log::debug!("Added author grant for {id}");
            }
        }

        map.insert(field.to_string(), grants.to_json());
        Ok(())
    }
}

/// Read the grants a writer put on a document.
///
/// A single string is cast to a one-item list. Any other value that is not
/// an array is rejected instead of being treated as absent.
fn declared_grants(value: Option<&Value>, field: &str) -> Result<Option<GrantSet>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(grant)) => Ok(Some(std::iter::once(grant.as_str()).collect())),
        Some(other) => GrantSet::from_json(other)
            .map(Some)
            .ok_or_else(|| Error::invalid_document(format!("'{field}' must be a list of grants"))),
    }
}

impl WriteHook for WriteGuard {
    fn before_write(&self, doc: &mut Value, kind: WriteKind) -> Result<()> {
        self.apply(doc, kind)
    }
}
