//! The [`GrantSet`] value type.
//!
//! A grant is a string token naming a permission or scope. Grant sets are
//! semantically unordered, but [`GrantSet`] keeps insertion order so that
//! grants written back to documents stay stable and readable
//! (`["admin", "public", "author-42"]`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The grant that permits anonymous access.
pub const PUBLIC_GRANT: &str = "public";

/// Prefix of the synthesized grant that ties a document to its author.
pub const AUTHOR_GRANT_PREFIX: &str = "author-";

/// Build the author grant for a stringified identity.
///
/// ```
/// use grantry_core::grants::author_grant;
///
/// assert_eq!(author_grant("557847a1"), "author-557847a1");
/// ```
pub fn author_grant(id: &str) -> String {
    format!("{AUTHOR_GRANT_PREFIX}{id}")
}

/// An insertion-ordered set of grants without duplicates.
///
/// Equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct GrantSet {
    grants: Vec<String>,
}

impl GrantSet {
    /// Create an empty grant set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a grant set from a JSON value.
    ///
    /// Returns `None` unless the value is an array. Non-string elements are
    /// skipped and duplicates collapse.
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        Some(items.iter().filter_map(Value::as_str).collect())
    }

    /// Insert a grant, returning `false` if it was already present.
    pub fn insert(&mut self, grant: impl Into<String>) -> bool {
        let grant = grant.into();
        if self.contains(&grant) {
            return false;
        }
        self.grants.push(grant);
        true
    }

    /// Add every grant from `other` that is not already present.
    pub fn extend_from(&mut self, other: &GrantSet) {
        for grant in other.iter() {
            self.insert(grant);
        }
    }

    /// Whether the set contains `grant`.
    pub fn contains(&self, grant: &str) -> bool {
        self.grants.iter().any(|g| g == grant)
    }

    /// Whether the two sets share at least one grant.
    pub fn intersects(&self, other: &GrantSet) -> bool {
        self.grants.iter().any(|g| other.contains(g))
    }

    /// Keep only the grants also present in `other`.
    pub fn retain_common(&mut self, other: &GrantSet) {
        self.grants.retain(|g| other.contains(g));
    }

    /// Grants of `self` that are absent from `other`, in `self`'s order.
    pub fn difference(&self, other: &GrantSet) -> Vec<String> {
        self.grants
            .iter()
            .filter(|g| !other.contains(g))
            .cloned()
            .collect()
    }

    /// Whether every grant in `self` is also in `other`.
    pub fn is_subset(&self, other: &GrantSet) -> bool {
        self.grants.iter().all(|g| other.contains(g))
    }

    /// Iterate over grants in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.grants.iter().map(String::as_str)
    }

    /// Number of grants.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// The grants as a slice, in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.grants
    }

    /// Convert to a JSON array of strings.
    pub fn to_json(&self) -> Value {
        Value::Array(self.grants.iter().cloned().map(Value::String).collect())
    }
}

impl PartialEq for GrantSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl Eq for GrantSet {}

impl<S: Into<String>> FromIterator<S> for GrantSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = GrantSet::new();
        for grant in iter {
            set.insert(grant);
        }
        set
    }
}

impl From<Vec<String>> for GrantSet {
    fn from(grants: Vec<String>) -> Self {
        grants.into_iter().collect()
    }
}

impl From<GrantSet> for Vec<String> {
    fn from(set: GrantSet) -> Self {
        set.grants
    }
}

impl IntoIterator for GrantSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.grants.into_iter()
    }
}

impl fmt::Display for GrantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.grants.join(","))
    }
}
