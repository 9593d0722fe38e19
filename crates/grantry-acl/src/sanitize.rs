//! Redaction of unauthorized substructure.
//!
//! Any object whose own grants attribute does not overlap the actor's grants
//! is replaced by a stub holding only that attribute. Redacted objects are
//! not descended into. The check is local to each object; the recursive
//! intersection used by the gate is not applied here.

use grantry_core::{GrantSet, Node, NodeMut};
use serde_json::{Map, Value};

/// Return a redacted copy of `doc`, leaving the input untouched.
pub fn sanitize(doc: &Value, actor: &GrantSet, field: &str) -> Value {
    let mut copy = doc.clone();
    sanitize_in_place(&mut copy, actor, field);
    copy
}

/// Redact unauthorized substructure of `value` in place.
pub fn sanitize_in_place(value: &mut Value, actor: &GrantSet, field: &str) {
    if let Some(grants) = Node::of(value).grants(field) {
        if !actor.intersects(&grants) {
            log::trace!("Redacting node with grants {grants}");
            redact(value, field);
            return;
        }
    }

    match NodeMut::of(value) {
        NodeMut::Keyed(map) => {
            for child in map.values_mut() {
                sanitize_in_place(child, actor, field);
            }
        }
        NodeMut::Sequence(items) => {
            for item in items.iter_mut() {
                sanitize_in_place(item, actor, field);
            }
        }
        NodeMut::Leaf(_) => {}
    }
}

fn redact(value: &mut Value, field: &str) {
    if let Value::Object(map) = value {
        let mut stub = Map::new();
        if let Some(grants) = map.remove(field) {
            stub.insert(field.to_string(), grants);
        }
        *map = stub;
    }
}
