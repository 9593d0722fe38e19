//! Query conditions and their evaluation.
//!
//! Conditions use the familiar document-store shape:
//!
//! ```
//! use grantry_storage::Query;
//! use serde_json::json;
//!
//! let query = Query::new()
//!     .where_eq("title", json!("Hello"))
//!     .where_in("grants", ["public", "admin"]);
//!
//! assert!(query.matches(&json!({"title": "Hello", "grants": ["public"]})));
//! assert!(!query.matches(&json!({"title": "Hello", "grants": ["ops"]})));
//! ```
//!
//! Supported forms, on top-level fields only:
//! - `{"field": value}`: equality (an array field matches if any element equals)
//! - `{"field": {"$in": [..]}}`: membership (an array field matches on any overlap)
//! - `{"$and": [{..}, {..}]}`: every sub-condition matches

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::traits::QueryConditions;

/// Membership operator.
pub const OP_IN: &str = "$in";

/// Conjunction operator.
pub const OP_AND: &str = "$and";

/// A find query: a map of filter conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query {
    conditions: Map<String, Value>,
}

impl Query {
    /// Create a query matching every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query from an existing conditions map.
    pub fn from_conditions(conditions: Map<String, Value>) -> Self {
        Self { conditions }
    }

    /// Require `field` to equal `value`.
    pub fn where_eq(mut self, field: &str, value: Value) -> Self {
        self.conditions.insert(field.to_string(), value);
        self
    }

    /// Require `field` to hold (or contain) one of `values`.
    pub fn where_in<I, S>(mut self, field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Value> = values.into_iter().map(|v| Value::String(v.into())).collect();
        let mut op = Map::new();
        op.insert(OP_IN.to_string(), Value::Array(values));
        self.conditions.insert(field.to_string(), Value::Object(op));
        self
    }

    /// Whether `doc` satisfies every condition.
    pub fn matches(&self, doc: &Value) -> bool {
        matches_conditions(&self.conditions, doc)
    }
}

impl QueryConditions for Query {
    fn conditions(&self) -> &Map<String, Value> {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.conditions
    }
}

fn matches_conditions(conditions: &Map<String, Value>, doc: &Value) -> bool {
    conditions.iter().all(|(key, expected)| {
        if key == OP_AND {
            return expected.as_array().is_some_and(|clauses| {
                clauses
                    .iter()
                    .all(|clause| clause.as_object().is_some_and(|sub| matches_conditions(sub, doc)))
            });
        }
        matches_field(doc.get(key), expected)
    })
}

fn matches_field(actual: Option<&Value>, expected: &Value) -> bool {
    let Value::Object(ops) = expected else {
        return matches_eq(actual, expected);
    };
    match ops.get(OP_IN) {
        Some(Value::Array(candidates)) if ops.len() == 1 => matches_in(actual, candidates),
        _ => {
            log::warn!("Unsupported query condition {expected}; treating as no match");
            false
        }
    }
}

fn matches_eq(actual: Option<&Value>, expected: &Value) -> bool {
    match actual {
        Some(Value::Array(items)) => items.contains(expected),
        Some(value) => value == expected,
        None => false,
    }
}

fn matches_in(actual: Option<&Value>, candidates: &[Value]) -> bool {
    match actual {
        Some(Value::Array(items)) => items.iter().any(|item| candidates.contains(item)),
        Some(value) => candidates.contains(value),
        None => false,
    }
}
