//! The [`AccessControl`] facade.
//!
//! Resolves options once and hands out the per-write and per-request
//! operations. Cloning is cheap; the configuration is shared.
//!
//! ```
//! use grantry_acl::{AccessControl, AclOptions};
//! use grantry_storage::WriteKind;
//! use serde_json::json;
//!
//! let acl = AccessControl::new(AclOptions::new().with_author_grant(true));
//!
//! let mut doc = json!({"title": "Hello", "author": {"_id": "u1"}});
//! acl.write_guard().apply(&mut doc, WriteKind::Create).unwrap();
//! assert_eq!(doc["grants"], json!(["admin", "public", "author-u1"]));
//!
//! let reader = json!({"_id": "u2", "grants": ["editor"]});
//! assert!(acl.authorize(Some(&reader)).check(doc).is_ok());
//! ```

use std::sync::Arc;

use grantry_storage::QueryConditions;
use serde_json::Value;

use crate::enforcement::Authorizer;
use crate::guard::WriteGuard;
use crate::policy::{AclConfig, AclOptions};

/// Grant-based access control bound to one resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    config: Arc<AclConfig>,
}

impl AccessControl {
    /// Resolve `options` and build the engine.
    pub fn new(options: AclOptions) -> Self {
        Self::from_config(options.resolve())
    }

    /// Build the engine from an already-resolved configuration.
    pub fn from_config(config: AclConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &AclConfig {
        &self.config
    }

    /// A write hook enforcing this configuration.
    pub fn write_guard(&self) -> WriteGuard {
        WriteGuard::new(Arc::clone(&self.config))
    }

    /// Authorization operations for `actor` (`None` for anonymous access).
    pub fn authorize(&self, actor: Option<&Value>) -> Authorizer {
        Authorizer::new(Arc::clone(&self.config), actor)
    }

    /// Narrow `query` to documents `actor` may see.
    pub fn restrict_query<Q: QueryConditions>(&self, query: Q, actor: Option<&Value>) -> Q {
        self.authorize(actor).restrict(query)
    }
}

impl From<AclOptions> for AccessControl {
    fn from(options: AclOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantry_storage::Query;
    use serde_json::json;

    #[test]
    fn test_default_engine() {
        let acl = AccessControl::default();
        let defaults: Vec<&str> = acl.config().default_grants().iter().collect();
        assert_eq!(defaults, ["admin", "public"]);
    }

    #[test]
    fn test_guards_share_config() {
        let acl = AccessControl::new(AclOptions::new().with_required_grants(["ops"]));
        let guard = acl.write_guard();
        assert_eq!(guard.config(), acl.config());
    }

    #[test]
    fn test_restrict_query_anonymous() {
        let acl = AccessControl::default();
        let query = acl.restrict_query(Query::new(), None);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"grants": {"$in": ["public"]}})
        );
    }

    #[test]
    fn test_authorize_anonymous() {
        let acl = AccessControl::default();
        let auth = acl.authorize(None);
        assert!(auth.actor().is_anonymous());
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AccessControl>();
        assert_send_sync::<WriteGuard>();
        assert_send_sync::<Authorizer>();
    }
}
