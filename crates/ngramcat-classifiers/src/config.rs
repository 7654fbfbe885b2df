//! Configuration for the classifier

use ngramcat_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunables of the threshold and candidate-count policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Multiplier on the best score under which a category is a candidate
    #[serde(default = "default_threshold_value")]
    pub threshold_value: f64,

    /// Most candidates accepted before a document counts as ambiguous
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,

    /// Fewest letters a document needs to be classified
    #[serde(default = "default_min_doc_size")]
    pub min_doc_size: usize,
}

fn default_threshold_value() -> f64 {
    1.03
}

fn default_max_candidates() -> usize {
    5
}

fn default_min_doc_size() -> usize {
    25
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold_value: default_threshold_value(),
            max_candidates: default_max_candidates(),
            min_doc_size: default_min_doc_size(),
        }
    }
}

impl ClassifierConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check every value is within its allowed range
    pub fn validate(&self) -> Result<()> {
        validate_threshold_value(self.threshold_value)?;
        validate_max_candidates(self.max_candidates)?;
        validate_min_doc_size(self.min_doc_size)
    }
}

pub(crate) fn validate_threshold_value(value: f64) -> Result<()> {
    if !value.is_finite() || value < 1.0 {
        return Err(Error::config(format!(
            "threshold_value must be a finite number >= 1.0, got {}",
            value
        )));
    }
    Ok(())
}

pub(crate) fn validate_max_candidates(value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::config("max_candidates must be at least 1"));
    }
    Ok(())
}

pub(crate) fn validate_min_doc_size(value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::config("min_doc_size must be at least 1"));
    }
    Ok(())
}
