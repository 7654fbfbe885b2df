//! Core types for ngramcat

/// Identifier of a category (a language, a topic, ...)
pub type CategoryId = i64;

/// Maximum number of ranked n-grams kept in any profile.
///
/// An n-gram missing from a category profile is treated as sitting at this
/// rank, i.e. maximally distant.
pub const MAX_PATTERNS: usize = 1000;

/// Longest n-gram extracted from a word, in code points or bytes
pub const MAX_NGRAM_LEN: usize = 5;

/// Longest encoded n-gram: five 4-byte UTF-8 code points
pub const MAX_NGRAM_BYTES: usize = 4 * MAX_NGRAM_LEN;
