//! Tagged-union views over document values.
//!
//! Every traversal in Grantry dispatches on [`Node`] (or [`NodeMut`]) so the
//! match over keyed structures, sequences, and leaves is exhaustive and
//! checked by the compiler.

use serde_json::{Map, Value};

use crate::grants::GrantSet;

/// A shared view of one level of a document tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// An object; the only shape that can carry a grants attribute.
    Keyed(&'a Map<String, Value>),
    /// An array of child values.
    Sequence(&'a [Value]),
    /// A string, number, boolean, or null.
    Leaf(&'a Value),
}

impl<'a> Node<'a> {
    /// Classify a value.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Keyed(map),
            Value::Array(items) => Node::Sequence(items),
            leaf => Node::Leaf(leaf),
        }
    }

    /// The grants this node exposes under `field`, if any.
    ///
    /// Only keyed nodes whose `field` holds an array expose grants.
    pub fn grants(&self, field: &str) -> Option<GrantSet> {
        match self {
            Node::Keyed(map) => map.get(field).and_then(GrantSet::from_json),
            Node::Sequence(_) | Node::Leaf(_) => None,
        }
    }
}

/// An exclusive view of one level of a document tree.
#[derive(Debug)]
pub enum NodeMut<'a> {
    /// An object.
    Keyed(&'a mut Map<String, Value>),
    /// An array of child values.
    Sequence(&'a mut Vec<Value>),
    /// A string, number, boolean, or null.
    Leaf(&'a mut Value),
}

impl<'a> NodeMut<'a> {
    /// Classify a value for in-place editing.
    pub fn of(value: &'a mut Value) -> Self {
        match value {
            Value::Object(map) => NodeMut::Keyed(map),
            Value::Array(items) => NodeMut::Sequence(items),
            leaf => NodeMut::Leaf(leaf),
        }
    }
}
