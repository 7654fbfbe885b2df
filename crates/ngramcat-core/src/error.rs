//! Error types for ngramcat

use crate::types::CategoryId;

/// Result type alias using ngramcat's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ngramcat operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Document has too few letters for reliable statistics
    #[error("document too short: {letters} letters, at least {min_doc_size} required")]
    TooShort { letters: usize, min_doc_size: usize },

    /// No enabled category has a trained profile
    #[error("no enabled category has a trained profile")]
    NoProfiles,

    /// More categories fall within the threshold than allowed
    #[error("ambiguous document: {} candidate categories, at most {} allowed", .candidates.len(), .max_candidates)]
    Ambiguous {
        /// Every candidate, best match first
        candidates: Vec<CategoryId>,
        max_candidates: usize,
    },

    /// Persisted profile data is malformed
    #[error("corrupt profile data: {0}")]
    CorruptProfile(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new corrupt profile error
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptProfile(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for outcomes that depend on the document rather than on the
    /// engine's setup.
    pub fn is_document_error(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::Ambiguous { .. })
    }
}
