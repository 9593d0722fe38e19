//! Utility modules for document handling.
//!
//! # Modules
//!
//! - [`path`]: Dotted-path lookup and identity stringification

pub mod path;
