//! Shared fixtures for integration tests.

use grantry_acl::{AccessControl, AclOptions};
use grantry_storage::MemoryCollection;
use serde_json::{Value, json};
use std::sync::Arc;

/// Author of the first two fixture articles.
pub const AUTHOR_ID: &str = "557847a1ac1235358644d8c8";

/// Three articles: two written by [`AUTHOR_ID`], one without an author.
pub fn articles() -> Vec<Value> {
    vec![
        json!({
            "title": "Lorem ipsum dolor sit amet",
            "author": {"_id": AUTHOR_ID, "name": "Ann"}
        }),
        json!({
            "title": "Consectetur adipiscing elit",
            "author": {"_id": AUTHOR_ID, "name": "Ann"}
        }),
        json!({
            "title": "Sed do eiusmod tempor"
        }),
    ]
}

/// An `articles` collection guarded by an engine built from `options`.
pub fn collection(options: AclOptions) -> (AccessControl, MemoryCollection) {
    let acl = AccessControl::new(options);
    let articles = MemoryCollection::new("articles").with_hook(Arc::new(acl.write_guard()));
    (acl, articles)
}

/// Grants of a stored document as plain strings.
pub fn grants_of(doc: &Value) -> Vec<String> {
    serde_json::from_value(doc["grants"].clone()).unwrap()
}
