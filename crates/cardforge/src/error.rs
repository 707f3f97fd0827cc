//! Error types for cardforge.
//!
//! Generation itself cannot fail once a profile is well-formed; the errors
//! here cover malformed profiles, catalog lookups, and configuration loading.

use thiserror::Error;

/// The main error type for cardforge operations.
#[derive(Debug, Error)]
pub enum CardError {
    /// A network profile violates its shape rules.
    #[error("invalid profile '{id}': {reason}")]
    InvalidProfile {
        /// Identifier of the offending profile.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No profile with this identifier exists in the catalog.
    #[error("unknown card network '{id}'")]
    UnknownNetwork {
        /// The identifier that was looked up.
        id: String,
    },

    /// A batch request exceeded the configured limit.
    #[error("batch of {requested} cards exceeds the limit of {max}")]
    BatchTooLarge {
        /// Number of cards requested.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred with additional context.
    #[error("{context}: {source}")]
    IoWithContext {
        /// What operation was being performed.
        context: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A TOML document could not be parsed.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON document could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cardforge operations.
pub type Result<T> = std::result::Result<T, CardError>;

impl CardError {
    /// Create an invalid profile error.
    pub fn invalid_profile(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown network error.
    pub fn unknown_network(id: impl Into<String>) -> Self {
        Self::UnknownNetwork { id: id.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an I/O error with context.
    pub fn io_context(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoWithContext {
            context: context.into(),
            source,
        }
    }

    /// Wrap an I/O result with context.
    pub fn with_io_context<T>(result: std::io::Result<T>, context: impl Into<String>) -> Result<T> {
        result.map_err(|e| Self::io_context(context, e))
    }

    /// Check if this is an invalid profile error.
    #[must_use]
    pub const fn is_invalid_profile(&self) -> bool {
        matches!(self, Self::InvalidProfile { .. })
    }

    /// Check if this is an unknown network error.
    #[must_use]
    pub const fn is_unknown_network(&self) -> bool {
        matches!(self, Self::UnknownNetwork { .. })
    }
}
