use std::path::PathBuf;

use clap::Parser;
use game_log::logging::initialize_logging_with_config;
use splits_engine::{SplitsConfig, SplitsEngine};
use tracing::{error, info};

/// Compute general splits from a player game log
#[derive(Debug, Parser)]
#[command(name = "splits-engine", version)]
struct Args {
    /// TOML configuration file (defaults and SPLITS_* env vars apply without it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game log envelope to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write general_splits.json
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SplitsConfig::load(args.config.as_deref())?;
    if let Some(input) = args.input {
        config.input_path = input;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }
    config.validate()?;

    initialize_logging_with_config(&config.log_level, &config.log_format)?;
    info!("Starting splits engine");
    info!("Loaded configuration: {:?}", config);

    let engine = SplitsEngine::new(config);
    match engine.run() {
        Ok(splits) => {
            for (season, tables) in &splits {
                let gp = tables.overall.first().map_or(0, |row| row.stats.gp);
                info!("{}: {} games, {} month rows", season, gp, tables.month.len());
            }
            info!("Splits engine completed");
            Ok(())
        }
        Err(e) => {
            error!("Splits engine failed: {:#}", e);
            Err(e)
        }
    }
}
