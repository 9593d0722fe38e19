//! Options and their resolution into an immutable [`AclConfig`].
//!
//! Every option is optional. Resolution is total: any combination of
//! options produces a usable configuration.
//!
//! # Example
//!
//! ```
//! use grantry_acl::policy::AclOptions;
//!
//! let config = AclOptions::new()
//!     .with_required_grants(["admin"])
//!     .with_author_grant(true)
//!     .resolve();
//!
//! let defaults: Vec<&str> = config.default_grants().iter().collect();
//! assert_eq!(defaults, ["admin", "public"]);
//! assert!(config.add_author_grant());
//! ```

use std::path::Path;

use grantry_core::{Error, GrantSet, PUBLIC_GRANT, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default grants field on actors.
pub const DEFAULT_ACTOR_GRANTS_FIELD: &str = "grants";
/// Default identity field on actors.
pub const DEFAULT_ACTOR_ID_FIELD: &str = "_id";
/// Default grants field on documents.
pub const DEFAULT_DOCUMENT_GRANTS_FIELD: &str = "grants";
/// Default dotted path to a document's author id.
pub const DEFAULT_AUTHOR_ID_PATH: &str = "author._id";
/// Grant required on every document unless configured otherwise.
pub const DEFAULT_REQUIRED_GRANT: &str = "admin";

/// Partial access-control options, as supplied by the caller.
///
/// Keys are camelCase (`requiredGrants`, `addAuthorGrant`, ...). The short
/// names used by earlier releases (`required`, `defaults`, `addAuthor`,
/// `userGrantsField`, `userIdField`, `docGrantsField`, `authorIdField`) are
/// accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AclOptions {
    /// Grants every document must carry.
    #[serde(default, alias = "required", skip_serializing_if = "Option::is_none")]
    pub required_grants: Option<Vec<String>>,

    /// Grants assigned to new documents that carry none. An explicit empty
    /// list opts out of public-by-default.
    #[serde(default, alias = "defaults", skip_serializing_if = "Option::is_none")]
    pub default_grants: Option<Vec<String>>,

    /// Whether to synthesize `author-<id>` grants.
    #[serde(default, alias = "addAuthor", skip_serializing_if = "Option::is_none")]
    pub add_author_grant: Option<bool>,

    /// Field holding an actor's grants.
    #[serde(default, alias = "userGrantsField", skip_serializing_if = "Option::is_none")]
    pub actor_grants_field: Option<String>,

    /// Dotted path to an actor's identity.
    #[serde(default, alias = "userIdField", skip_serializing_if = "Option::is_none")]
    pub actor_id_field: Option<String>,

    /// Field holding a document's (or sub-object's) grants.
    #[serde(default, alias = "docGrantsField", skip_serializing_if = "Option::is_none")]
    pub document_grants_field: Option<String>,

    /// Dotted path to a document's author identity.
    #[serde(default, alias = "authorIdField", skip_serializing_if = "Option::is_none")]
    pub author_id_path: Option<String>,
}

impl AclOptions {
    /// Create empty options (every field defaulted at resolution).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Failed to parse options: {e}")))
    }

    /// Load options from a `.json` or `.toml` file.
    ///
    /// Files without a `.json` extension are read as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            serde_json::from_str(&content).map_err(|e| {
                Error::config(format!("Failed to parse {}: {e}", path.display()))
            })
        } else {
            toml::from_str(&content).map_err(|e| {
                Error::config(format!("Failed to parse {}: {e}", path.display()))
            })
        }
    }

    /// Set the required grants.
    pub fn with_required_grants<I, S>(mut self, grants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_grants = Some(grants.into_iter().map(Into::into).collect());
        self
    }

    /// Set the default grants.
    pub fn with_default_grants<I, S>(mut self, grants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_grants = Some(grants.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable author grants.
    pub fn with_author_grant(mut self, enabled: bool) -> Self {
        self.add_author_grant = Some(enabled);
        self
    }

    /// Set the actor grants field.
    pub fn with_actor_grants_field(mut self, field: &str) -> Self {
        self.actor_grants_field = Some(field.to_string());
        self
    }

    /// Set the actor identity path.
    pub fn with_actor_id_field(mut self, field: &str) -> Self {
        self.actor_id_field = Some(field.to_string());
        self
    }

    /// Set the document grants field.
    pub fn with_document_grants_field(mut self, field: &str) -> Self {
        self.document_grants_field = Some(field.to_string());
        self
    }

    /// Set the document author identity path.
    pub fn with_author_id_path(mut self, path: &str) -> Self {
        self.author_id_path = Some(path.to_string());
        self
    }

    /// Resolve into the canonical configuration.
    ///
    /// - required grants default to `["admin"]`
    /// - default grants, when not supplied, are the required grants plus
    ///   `"public"`
    /// - required grants are always folded into the default grants
    pub fn resolve(self) -> AclConfig {
        let required_grants: GrantSet = match self.required_grants {
            Some(grants) => grants.into(),
            None => std::iter::once(DEFAULT_REQUIRED_GRANT).collect(),
        };

        let mut default_grants: GrantSet = match self.default_grants {
            Some(grants) => grants.into(),
            None => {
                let mut grants = required_grants.clone();
                grants.insert(PUBLIC_GRANT);
                grants
            }
        };
        default_grants.extend_from(&required_grants);

        let config = AclConfig {
            required_grants,
            default_grants,
            add_author_grant: self.add_author_grant.unwrap_or(false),
            actor_grants_field: self
                .actor_grants_field
                .unwrap_or_else(|| DEFAULT_ACTOR_GRANTS_FIELD.to_string()),
            actor_id_field: self
                .actor_id_field
                .unwrap_or_else(|| DEFAULT_ACTOR_ID_FIELD.to_string()),
            document_grants_field: self
                .document_grants_field
                .unwrap_or_else(|| DEFAULT_DOCUMENT_GRANTS_FIELD.to_string()),
            author_id_path: self
                .author_id_path
                .unwrap_or_else(|| DEFAULT_AUTHOR_ID_PATH.to_string()),
        };

        log::debug!(
            "Resolved ACL config: required={} defaults={} author_grant={}",
            config.required_grants,
            config.default_grants,
            config.add_author_grant
        );
        config
    }
}

/// Canonical, immutable access-control configuration.
///
/// Invariant: `required_grants ⊆ default_grants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AclConfig {
    required_grants: GrantSet,
    default_grants: GrantSet,
    add_author_grant: bool,
    actor_grants_field: String,
    actor_id_field: String,
    document_grants_field: String,
    author_id_path: String,
}

impl AclConfig {
    /// Grants every document must carry.
    pub fn required_grants(&self) -> &GrantSet {
        &self.required_grants
    }

    /// Grants assigned to new documents that carry none.
    pub fn default_grants(&self) -> &GrantSet {
        &self.default_grants
    }

    /// Whether `author-<id>` grants are synthesized.
    pub fn add_author_grant(&self) -> bool {
        self.add_author_grant
    }

    /// Field holding an actor's grants.
    pub fn actor_grants_field(&self) -> &str {
        &self.actor_grants_field
    }

    /// Dotted path to an actor's identity.
    pub fn actor_id_field(&self) -> &str {
        &self.actor_id_field
    }

    /// Field holding a document's grants.
    pub fn document_grants_field(&self) -> &str {
        &self.document_grants_field
    }

    /// Dotted path to a document's author identity.
    pub fn author_id_path(&self) -> &str {
        &self.author_id_path
    }
}

impl Default for AclConfig {
    fn default() -> Self {
        AclOptions::default().resolve()
    }
}

impl From<AclOptions> for AclConfig {
    fn from(options: AclOptions) -> Self {
        options.resolve()
    }
}
