//! Query narrowing.
//!
//! The store-level predicate checks only the top-level grants field
//! (set membership against the actor's grants). The recursive intersection
//! rule is left to [`crate::enforcement`] and [`crate::sanitize`], since a
//! store query cannot evaluate it.

use grantry_core::GrantSet;
use grantry_storage::QueryConditions;
use grantry_storage::query::{OP_AND, OP_IN};
use serde_json::{Map, Value};

/// The condition value requiring a grants field to overlap `actor`.
pub fn grants_predicate(actor: &GrantSet) -> Value {
    let mut predicate = Map::new();
    predicate.insert(OP_IN.to_string(), actor.to_json());
    Value::Object(predicate)
}

/// Add the grants predicate for `field` to a conditions map.
///
/// A condition already present on `field` is kept: both are combined under
/// `$and`.
pub fn inject_grants_filter(conditions: &mut Map<String, Value>, actor: &GrantSet, field: &str) {
    let predicate = grants_predicate(actor);

    let Some(existing) = conditions.remove(field) else {
        conditions.insert(field.to_string(), predicate);
        return;
    };

    let clauses = [single(field, existing), single(field, predicate)];
    match conditions.remove(OP_AND) {
        Some(Value::Array(mut list)) => {
            list.extend(clauses);
            conditions.insert(OP_AND.to_string(), Value::Array(list));
        }
        Some(other) => {
            let mut list = vec![other];
            list.extend(clauses);
            conditions.insert(OP_AND.to_string(), Value::Array(list));
        }
        None => {
            conditions.insert(OP_AND.to_string(), Value::Array(clauses.into()));
        }
    }
}

/// Narrow a query builder to documents the actor may see, returning the
/// same builder.
pub fn restrict_query<Q: QueryConditions>(mut query: Q, actor: &GrantSet, field: &str) -> Q {
    inject_grants_filter(query.conditions_mut(), actor, field);
    log::trace!("Restricted query on '{field}' to {actor}");
    query
}

fn single(field: &str, condition: Value) -> Value {
    let mut map = Map::new();
    map.insert(field.to_string(), condition);
    Value::Object(map)
}
