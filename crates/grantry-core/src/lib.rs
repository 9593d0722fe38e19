//! Grantry Core: shared types, errors, and document utilities.
//!
//! This crate provides the foundational types used across all Grantry crates.
//! It has no internal Grantry dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types, the read-time [`Denial`], and the Result alias
//! - [`grants`]: The [`GrantSet`] value type and grant naming helpers
//! - [`node`]: Tagged-union views used by every document traversal
//! - [`util`]: Dotted-path and identity utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod grants;
pub mod node;
mod proptests;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Denial, Error, Result};
pub use grants::{AUTHOR_GRANT_PREFIX, GrantSet, PUBLIC_GRANT, author_grant};
pub use node::{Node, NodeMut};

// Convenience re-exports from util
pub use util::path::{identity_string, lookup, resolve_identity};
