//! ngramcat Classifiers
//!
//! Text categorization by n-gram frequency ranks.
//!
//! Every category is described by the ranking of its 1000 most frequent
//! character n-grams (lengths 1 to 5, words padded with `_`). A document is
//! ranked the same way and scored against each enabled category by summing
//! how far each of its n-grams is from its rank in the category; categories
//! within a relative threshold of the best score are returned, best first.
//!
//! - [`PatternExtractor`] turns text into a [`RankedProfile`]
//! - [`CategoryProfile`] is a trained, immutable n-gram → rank table
//! - [`ProfileRegistry`] owns categories, flags and profiles
//! - [`Classifier`] applies the distance and threshold policy
//! - [`codec`] persists trained profiles in a versioned binary format

pub mod classifier;
pub mod codec;
pub mod config;
pub mod patterns;
pub mod profile;
pub mod registry;

pub use classifier::{select_candidates, CategoryScore, ClassificationResult, Classifier};
pub use config::ClassifierConfig;
pub use patterns::{ExtractionMode, Pattern, PatternExtractor, RankedProfile, BOUNDARY};
pub use profile::CategoryProfile;
pub use registry::{Category, ProfileRegistry, SharedRegistry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::{ClassificationResult, Classifier};
    pub use crate::config::ClassifierConfig;
    pub use crate::patterns::{ExtractionMode, PatternExtractor};
    pub use crate::profile::CategoryProfile;
    pub use crate::registry::{ProfileRegistry, SharedRegistry};
    pub use ngramcat_core::{CategoryId, Error, Result};
}
