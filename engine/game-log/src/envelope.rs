//! `{meta, data}` wrapper shared by every JSON output file

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// When the file was produced (RFC 3339, UTC)
    pub generated_at: DateTime<Utc>,
    /// Season the file is scoped to, if any
    pub season: Option<String>,
    /// Upstream source, e.g. "basketball-reference.com"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wrap `data`, stamped with the current time
    pub fn new(data: T) -> Self {
        Self { meta: Meta { generated_at: Utc::now(), season: None, source: None }, data }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.meta.season = Some(season.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.meta.source = Some(source.into());
        self
    }
}

/// Read and parse an envelope file
pub fn read_envelope<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Envelope<T>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write an envelope as pretty JSON, creating parent directories
pub fn write_envelope<T: Serialize, P: AsRef<Path>>(path: P, envelope: &Envelope<T>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(envelope).context("Failed to serialize output")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Wrote {}", path.display());
    Ok(())
}
