//! Error types shared by all Grantry crates.

use thiserror::Error;

/// Result type alias for Grantry operations
pub type Result<T> = std::result::Result<T, Error>;

/// A read-time authorization denial.
///
/// Returned by the authorization gate when an actor may not see a document.
/// Denials are a pure function of (actor, document, configuration), so the
/// same inputs always produce the same denial.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    /// No identity was presented and the document is not public.
    #[error("unauthorized: document is not public")]
    Unauthorized,

    /// An identity was presented but shares no grant with the document.
    #[error("forbidden: insufficient grants")]
    Forbidden,
}

impl Denial {
    /// The HTTP status code equivalent of this denial.
    pub fn status_code(&self) -> u16 {
        match self {
            Denial::Unauthorized => 401,
            Denial::Forbidden => 403,
        }
    }
}

/// Errors that can occur in Grantry
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A write removed (or never carried) grants the collection requires.
    #[error("Missing required grants: {}", missing.join(","))]
    MissingRequiredGrants {
        /// Required grant names absent from the document
        missing: Vec<String>,
    },

    /// Read-time authorization denial
    #[error(transparent)]
    Denied(#[from] Denial),

    /// The document cannot carry grants (e.g. its root is not an object)
    #[error("Invalid document: {message}")]
    InvalidDocument {
        /// What is wrong with the document
        message: String,
    },

    /// Document lookup by id failed
    #[error("Document not found: {id}")]
    NotFound {
        /// Identifier that was not found
        id: String,
    },

    /// A document with the same id is already stored
    #[error("Document already exists: {id}")]
    Conflict {
        /// Identifier that is already taken
        id: String,
    },

    /// Options could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new invalid-document error.
    pub fn invalid_document<S: Into<String>>(message: S) -> Self {
        Error::InvalidDocument {
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates a new conflict error.
    pub fn conflict<S: Into<String>>(id: S) -> Self {
        Error::Conflict { id: id.into() }
    }
}
