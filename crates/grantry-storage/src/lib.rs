//! # grantry-storage
//!
//! Document store seams for Grantry.
//!
//! The authorization engine treats the store as an external collaborator.
//! This crate names the points where the two meet:
//! - [`WriteHook`]: runs before a write is persisted and may veto it
//! - [`QueryConditions`]: a query builder whose filter can be narrowed
//! - [`DocumentStore`]: asynchronous create/save/get/find
//! - [`MemoryCollection`]: an in-memory store (for testing)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod memory;
pub mod query;
pub mod traits;

pub use grantry_core::{Error, Result};
pub use memory::MemoryCollection;
pub use query::Query;
pub use traits::{DocumentStore, QueryConditions, WriteHook, WriteKind};
