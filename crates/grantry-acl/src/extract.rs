//! Document-side effective grants.
//!
//! A document's effective grants are the intersection of every grants
//! attribute found anywhere in its tree. Nesting narrows access: a
//! sub-object can restrict who may see the document, never widen it. A level
//! without a grants attribute does not narrow anything.

use grantry_core::{GrantSet, Node};
use serde_json::Value;

/// Intersect every grants attribute in the tree rooted at `value`.
///
/// Returns `None` when no grants attribute exists anywhere in the tree.
pub fn extract_grants(value: &Value, field: &str) -> Option<GrantSet> {
    let mut effective = None;
    visit(value, field, &mut effective);
    effective
}

/// Like [`extract_grants`], but an undetermined tree yields the empty set,
/// which no actor satisfies.
pub fn effective_grants(value: &Value, field: &str) -> GrantSet {
    extract_grants(value, field).unwrap_or_default()
}

fn visit(value: &Value, field: &str, effective: &mut Option<GrantSet>) {
    let node = Node::of(value);

    if let Some(grants) = node.grants(field) {
        match effective {
            Some(current) => current.retain_common(&grants),
            None => *effective = Some(grants),
        }
    }

    match node {
        Node::Keyed(map) => {
            for child in map.values() {
                visit(child, field, effective);
            }
        }
        Node::Sequence(items) => {
            for item in items {
                visit(item, field, effective);
            }
        }
        Node::Leaf(_) => {}
    }
}
