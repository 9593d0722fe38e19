//! Dotted-path lookup and identity stringification.
//!
//! Options such as `author._id` name a value nested inside a document or an
//! actor record. A path that misses at any segment is simply unresolvable;
//! it is never an error.
//!
//! # Example
//!
//! ```
//! use grantry_core::util::path::{lookup, resolve_identity};
//! use serde_json::json;
//!
//! let doc = json!({"author": {"_id": "557847a1", "name": "Ann"}});
//! assert_eq!(lookup(&doc, "author.name"), Some(&json!("Ann")));
//! assert_eq!(resolve_identity(&doc, "author._id"), Some("557847a1".to_string()));
//! assert_eq!(resolve_identity(&doc, "editor._id"), None);
//! ```

use serde_json::Value;

/// Extended-JSON key wrapping an object id (`{"$oid": "..."}`).
const OID_KEY: &str = "$oid";

/// Follow a dotted path through objects (by key) and arrays (by index).
///
/// An empty path resolves to the value itself.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }

    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// Stringify a value used as an identity.
///
/// Accepts non-empty strings, numbers, and `{"$oid": "..."}` objects.
/// Everything else (null, booleans, empty strings, other structures) is not
/// an identity.
pub fn identity_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get(OID_KEY)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(String::from),
        _ => None,
    }
}

/// Look up `path` and stringify the result as an identity.
pub fn resolve_identity(value: &Value, path: &str) -> Option<String> {
    lookup(value, path).and_then(identity_string)
}
