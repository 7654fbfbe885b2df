//! ngramcat Core
//!
//! Core types and error handling shared across ngramcat components.
//!
//! This crate provides:
//! - The category identifier type and profile size limits
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{CategoryId, MAX_NGRAM_BYTES, MAX_NGRAM_LEN, MAX_PATTERNS};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{CategoryId, MAX_PATTERNS};
}
