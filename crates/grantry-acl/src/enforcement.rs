//! Read-time authorization.
//!
//! [`authorize_grants`] is the gate: anonymous actors need `"public"` in the
//! document's effective grants, identified actors need any overlap.
//! [`Authorizer`] binds the gate, the sanitizer, and the query filter to one
//! actor so a request computes the actor's grants once.

use std::sync::Arc;

use grantry_core::{Denial, GrantSet, PUBLIC_GRANT};
use grantry_storage::QueryConditions;
use serde_json::Value;

use crate::actor::{ActorGrants, actor_grants};
use crate::extract::effective_grants;
use crate::filter::restrict_query;
use crate::policy::AclConfig;
use crate::sanitize::sanitize;

/// Decide whether an actor may read a document with the given effective
/// grants.
pub fn authorize_grants(actor: &ActorGrants, document: &GrantSet) -> Result<(), Denial> {
    if actor.is_anonymous() && !document.contains(PUBLIC_GRANT) {
        return Err(Denial::Unauthorized);
    }
    if !actor.grants().intersects(document) {
        return Err(Denial::Forbidden);
    }
    Ok(())
}

/// Authorization operations for a single actor.
#[derive(Debug, Clone)]
pub struct Authorizer {
    config: Arc<AclConfig>,
    actor: ActorGrants,
}

impl Authorizer {
    /// Compute the actor's grants under `config`.
    pub fn new(config: Arc<AclConfig>, actor: Option<&Value>) -> Self {
        let actor = actor_grants(actor, &config);
        Self { config, actor }
    }

    /// The actor's effective grants.
    pub fn actor(&self) -> &ActorGrants {
        &self.actor
    }

    /// Gate a document without taking ownership of it.
    pub fn verify(&self, doc: &Value) -> Result<(), Denial> {
        let document = effective_grants(doc, self.config.document_grants_field());
        let decision = authorize_grants(&self.actor, &document);
        log::trace!(
            "Gate: actor={} document={} decision={decision:?}",
            self.actor.grants(),
            document
        );
        decision
    }

    /// Gate a document, returning it unchanged when allowed.
    pub fn check(&self, doc: Value) -> Result<Value, Denial> {
        self.verify(&doc)?;
        Ok(doc)
    }

    /// Return a copy of `doc` with unauthorized substructure redacted.
    ///
    /// This does not gate the root; call [`check`](Self::check) first (or
    /// use [`check_and_sanitize`](Self::check_and_sanitize)) for reads of
    /// a whole document.
    pub fn sanitize(&self, doc: &Value) -> Value {
        sanitize(doc, self.actor.grants(), self.config.document_grants_field())
    }

    /// Gate a document, then redact what the actor may not see inside it.
    pub fn check_and_sanitize(&self, doc: &Value) -> Result<Value, Denial> {
        self.verify(doc)?;
        Ok(self.sanitize(doc))
    }

    /// Keep only the documents the actor may read.
    pub fn retain_authorized(&self, docs: Vec<Value>) -> Vec<Value> {
        docs.into_iter()
            .filter(|doc| self.verify(doc).is_ok())
            .collect()
    }

    /// Narrow a query to documents whose top-level grants overlap the
    /// actor's.
    pub fn restrict<Q: QueryConditions>(&self, query: Q) -> Q {
        restrict_query(
            query,
            self.actor.grants(),
            self.config.document_grants_field(),
        )
    }
}
