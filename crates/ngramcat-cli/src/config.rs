//! CLI configuration

use ngramcat_classifiers::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings shared by every subcommand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Profile file used when a command does not name one
    #[serde(default = "default_profiles")]
    pub profiles: PathBuf,

    /// Threshold and candidate policy
    #[serde(flatten)]
    pub classifier: ClassifierConfig,
}

impl CliConfig {
    /// Load configuration from file and environment.
    ///
    /// The YAML file is optional; `NGRAMCAT_*` variables (for example
    /// `NGRAMCAT_MAX_CANDIDATES=3`) override it.
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::new(config_path, config::FileFormat::Yaml).required(false))
            .add_source(config::Environment::with_prefix("NGRAMCAT").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.classifier.validate()?;
        Ok(config)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            profiles: default_profiles(),
            classifier: ClassifierConfig::default(),
        }
    }
}

fn default_profiles() -> PathBuf {
    PathBuf::from("profiles.ngcp")
}
