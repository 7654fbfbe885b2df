//! Frequency-rank classifier and its result types

use crate::config::{self, ClassifierConfig};
use crate::patterns::{ExtractionMode, PatternExtractor};
use crate::registry::ProfileRegistry;
use ngramcat_core::{CategoryId, Error, Result};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Distance of a document to one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: CategoryId,

    /// Out-of-place distance; lower is closer
    pub score: u64,
}

/// Result of classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Candidate categories, best match first
    pub categories: Vec<CategoryId>,

    /// Every scored category, ascending by score then id
    pub scores: Vec<CategoryScore>,

    /// Score cut-off candidates had to meet
    pub threshold: f64,

    /// Latency in microseconds
    pub latency_us: u64,
}

impl ClassificationResult {
    /// The closest category
    pub fn best(&self) -> Option<CategoryId> {
        self.categories.first().copied()
    }

    /// True when exactly one category is within the threshold
    pub fn is_unique(&self) -> bool {
        self.categories.len() == 1
    }
}

/// Scores documents against the enabled profiles of a [`ProfileRegistry`].
///
/// Holds no registry state of its own, so one classifier can serve any
/// number of threads reading the same registry.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
    extractor: PatternExtractor,
}

impl Classifier {
    /// Create a new classifier
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            extractor: PatternExtractor::new()?,
        })
    }

    /// Create a classifier with the default policy
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClassifierConfig::default())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Extractor used for documents, also suitable for training
    pub fn extractor(&self) -> &PatternExtractor {
        &self.extractor
    }

    pub fn threshold_value(&self) -> f64 {
        self.config.threshold_value
    }

    pub fn set_threshold_value(&mut self, threshold_value: f64) -> Result<()> {
        config::validate_threshold_value(threshold_value)?;
        self.config.threshold_value = threshold_value;
        Ok(())
    }

    pub fn max_candidates(&self) -> usize {
        self.config.max_candidates
    }

    pub fn set_max_candidates(&mut self, max_candidates: usize) -> Result<()> {
        config::validate_max_candidates(max_candidates)?;
        self.config.max_candidates = max_candidates;
        Ok(())
    }

    pub fn min_doc_size(&self) -> usize {
        self.config.min_doc_size
    }

    pub fn set_min_doc_size(&mut self, min_doc_size: usize) -> Result<()> {
        config::validate_min_doc_size(min_doc_size)?;
        self.config.min_doc_size = min_doc_size;
        Ok(())
    }

    /// Classify a document.
    ///
    /// Fails with [`Error::TooShort`] below `min_doc_size` letters,
    /// [`Error::NoProfiles`] when no enabled category is trained, and
    /// [`Error::Ambiguous`] when more than `max_candidates` categories fall
    /// within the threshold.
    pub fn classify(&self, registry: &ProfileRegistry, document: &str) -> Result<ClassificationResult> {
        let start = Instant::now();

        let outcome = self.score_document(registry, document).map(|mut result| {
            result.latency_us = start.elapsed().as_micros() as u64;
            result
        });

        record_outcome(&outcome, start.elapsed());
        outcome
    }

    fn score_document(&self, registry: &ProfileRegistry, document: &str) -> Result<ClassificationResult> {
        let letters = self.extractor.letter_count(document);
        if letters < self.config.min_doc_size {
            return Err(Error::TooShort {
                letters,
                min_doc_size: self.config.min_doc_size,
            });
        }

        let ranked = self.extractor.extract(document, ExtractionMode::CodePoints);

        let mut scores: Vec<CategoryScore> = registry
            .scorable()
            .map(|(category, profile)| CategoryScore {
                category,
                score: profile.distance(&ranked),
            })
            .collect();

        if scores.is_empty() {
            return Err(Error::NoProfiles);
        }

        scores.sort_by_key(|s| (s.score, s.category));
        trace!(?scores, "Scored categories");

        let (threshold, candidates) = select_candidates(&scores, self.config.threshold_value);

        if candidates.len() > self.config.max_candidates {
            return Err(Error::Ambiguous {
                candidates,
                max_candidates: self.config.max_candidates,
            });
        }

        Ok(ClassificationResult {
            categories: candidates,
            scores,
            threshold,
            latency_us: 0,
        })
    }
}

/// Apply the relative threshold around the best score.
///
/// Returns the threshold and every category scoring at or below it, ordered
/// by score then id.
pub fn select_candidates(scores: &[CategoryScore], threshold_value: f64) -> (f64, Vec<CategoryId>) {
    let Some(min_score) = scores.iter().map(|s| s.score).min() else {
        return (0.0, Vec::new());
    };

    let threshold = min_score as f64 * threshold_value;

    let mut candidates: Vec<&CategoryScore> = scores
        .iter()
        .filter(|s| s.score as f64 <= threshold)
        .collect();
    candidates.sort_by_key(|s| (s.score, s.category));

    (threshold, candidates.into_iter().map(|s| s.category).collect())
}

fn record_outcome(outcome: &Result<ClassificationResult>, elapsed: Duration) {
    let label = match outcome {
        Ok(_) => "matched",
        Err(Error::TooShort { .. }) => "too_short",
        Err(Error::NoProfiles) => "no_profiles",
        Err(Error::Ambiguous { .. }) => "ambiguous",
        Err(_) => "error",
    };

    match outcome {
        Ok(result) => debug!(
            categories = ?result.categories,
            threshold = result.threshold,
            latency_us = result.latency_us,
            "Classified document"
        ),
        Err(e) => debug!(outcome = label, error = %e, "Document not classified"),
    }

    metrics::counter!("ngramcat_classifications_total", "outcome" => label).increment(1);
    metrics::histogram!("ngramcat_classify_latency_us").record(elapsed.as_micros() as f64);
}
