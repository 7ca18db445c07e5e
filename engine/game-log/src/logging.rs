//! Logging and tracing setup

use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize logging with an explicit level and format (`json`, `pretty`, anything else = compact).
///
/// `RUST_LOG` still wins over `level` when it is set.
pub fn initialize_logging_with_config(level: &str, format: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let fmt_layer = match format {
        "json" => fmt::layer().json().with_target(true).with_file(true).with_line_number(true).boxed(),
        "pretty" => fmt::layer().pretty().with_target(false).with_ansi(true).boxed(),
        _ => fmt::layer().compact().with_target(false).with_ansi(true).boxed(),
    };

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}
