use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::plan::{default_plans, SeasonPlan};

/// Configuration for the shot synthesizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    /// Seed for the ChaCha8 random source; the same seed replays the same chart
    pub seed: u64,

    /// Team abbreviation used in generated matchups
    pub team: String,

    /// Where `shot_chart.json` is written
    pub output_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log format (json, pretty, compact)
    pub log_format: String,

    /// Season plans; the built-in three seasons when unset
    pub plans: Option<Vec<SeasonPlan>>,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            team: "DEN".to_string(),
            output_path: PathBuf::from("data/shot_chart.json"),
            log_level: "info".to_string(),
            log_format: "compact".to_string(),
            plans: None,
        }
    }
}

impl SynthConfig {
    /// Defaults, then the optional TOML file, then `SHOTS_*` environment variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder().add_source(
            ::config::Config::try_from(&Self::default()).context("Failed to seed config defaults")?,
        );

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let config: Self = builder
            .add_source(::config::Environment::with_prefix("SHOTS"))
            .build()
            .context("Failed to load synthesizer configuration")?
            .try_deserialize()
            .context("Invalid synthesizer configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> anyhow::Result<Self> {
        Self::load(None)
    }

    /// Configured plans, or the defaults
    pub fn plans(&self) -> Vec<SeasonPlan> {
        self.plans.clone().unwrap_or_else(default_plans)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.team.trim().is_empty() {
            anyhow::bail!("team abbreviation must not be empty");
        }
        for plan in self.plans.iter().flatten() {
            if plan.games == 0 {
                anyhow::bail!("season {} schedules no games", plan.season);
            }
            for target in &plan.targets {
                if target.count < 0 {
                    anyhow::bail!(
                        "season {} {}: shot count {} is negative",
                        plan.season,
                        target.zone.label(),
                        target.count
                    );
                }
                if !(0.0..=1.0).contains(&target.make_pct) {
                    anyhow::bail!(
                        "season {} {}: make_pct {} is outside [0, 1]",
                        plan.season,
                        target.zone.label(),
                        target.make_pct
                    );
                }
            }
        }
        Ok(())
    }
}
