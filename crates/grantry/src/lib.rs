//! Grantry umbrella crate.
//!
//! This crate re-exports all Grantry components for convenience.

#![doc = include_str!("../README.md")]

pub use grantry_acl as acl;
pub use grantry_core as core;
pub use grantry_storage as storage;

pub use grantry_acl::{AccessControl, AclOptions};
pub use grantry_core::{Denial, Error, GrantSet, Result};
