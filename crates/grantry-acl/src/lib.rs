//! # grantry-acl
//!
//! Grant-based access control for documents.
//!
//! This crate implements the authorization engine:
//! - Option resolution ([`policy`])
//! - Actor grant computation ([`actor`])
//! - Write-time grant assignment and validation ([`guard`])
//! - Recursive document grant extraction ([`extract`])
//! - The read gate ([`enforcement`])
//! - Query narrowing ([`filter`])
//! - Redaction of unauthorized substructure ([`sanitize`])
//!
//! [`AccessControl`] ties them to a single resolved configuration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod enforcement;
pub mod engine;
pub mod extract;
pub mod filter;
pub mod guard;
pub mod policy;
mod proptests;
pub mod sanitize;

pub use actor::{ActorGrants, actor_grants};
pub use engine::AccessControl;
pub use enforcement::{Authorizer, authorize_grants};
pub use extract::{effective_grants, extract_grants};
pub use filter::{grants_predicate, inject_grants_filter, restrict_query};
pub use grantry_core::{Denial, Error, GrantSet, Result};
pub use guard::WriteGuard;
pub use policy::{AclConfig, AclOptions};
pub use sanitize::{sanitize, sanitize_in_place};
