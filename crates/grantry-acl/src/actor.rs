//! Actor-side effective grants.

use grantry_core::{GrantSet, PUBLIC_GRANT, author_grant, lookup, resolve_identity};
use serde_json::Value;

use crate::policy::AclConfig;

/// The effective grants of the actor making a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorGrants {
    grants: GrantSet,
    anonymous: bool,
}

impl ActorGrants {
    /// Grants of an actor that presented no identity: just `"public"`.
    pub fn anonymous() -> Self {
        Self {
            grants: std::iter::once(PUBLIC_GRANT).collect(),
            anonymous: true,
        }
    }

    /// The effective grant set.
    pub fn grants(&self) -> &GrantSet {
        &self.grants
    }

    /// Whether no identity was presented.
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }
}

/// Compute an actor's effective grants.
///
/// The union of the actor's stored grants, `"public"`, and (when author
/// grants are enabled and the actor's identity resolves) `"author-<id>"`.
/// A missing or JSON `null` actor is anonymous.
pub fn actor_grants(actor: Option<&Value>, config: &AclConfig) -> ActorGrants {
    let Some(actor) = actor.filter(|a| !a.is_null()) else {
        return ActorGrants::anonymous();
    };

    let mut grants = lookup(actor, config.actor_grants_field())
        .and_then(GrantSet::from_json)
        .unwrap_or_default();
    grants.insert(PUBLIC_GRANT);

    if config.add_author_grant() {
        if let Some(id) = resolve_identity(actor, config.actor_id_field()) {
            grants.insert(author_grant(&id));
        }
    }

    ActorGrants {
        grants,
        anonymous: false,
    }
}
