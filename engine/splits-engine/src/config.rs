use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the splits engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitsConfig {
    /// Game log envelope to read (`{"meta": .., "data": {"games": [..]}}`)
    pub input_path: PathBuf,

    /// Where `general_splits.json` is written
    pub output_path: PathBuf,

    /// Team abbreviation used when a row's matchup has to be rebuilt
    pub team: String,

    /// Only aggregate games of this season type (e.g., "Regular Season"); all when unset
    pub season_type: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log format (json, pretty, compact)
    pub log_format: String,
}

impl Default for SplitsConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("data/game_log.json"),
            output_path: PathBuf::from("data/general_splits.json"),
            team: "DEN".to_string(),
            season_type: None,
            log_level: "info".to_string(),
            log_format: "compact".to_string(),
        }
    }
}

impl SplitsConfig {
    /// Defaults, then the optional TOML file, then `SPLITS_*` environment variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder().add_source(
            ::config::Config::try_from(&Self::default()).context("Failed to seed config defaults")?,
        );

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix("SPLITS"))
            .build()
            .context("Failed to load splits configuration")?
            .try_deserialize()
            .context("Invalid splits configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(None)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.team.trim().is_empty() {
            anyhow::bail!("team abbreviation must not be empty");
        }
        if self.input_path == self.output_path {
            anyhow::bail!("input and output paths must differ: {}", self.input_path.display());
        }
        Ok(())
    }
}
