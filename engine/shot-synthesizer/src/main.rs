use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use game_log::logging::initialize_logging_with_config;
use game_log::{write_envelope, Envelope};
use shot_synthesizer::{run_plans, zone_summary, ShotChartData, ShotSynthesizer, SynthConfig};
use tracing::{error, info};

/// Generate a seeded synthetic shot chart
#[derive(Debug, Parser)]
#[command(name = "shot-synthesizer", version)]
struct Args {
    /// TOML configuration file (defaults and SHOTS_* env vars apply without it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where to write shot_chart.json
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = SynthConfig::load(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(output) = args.output {
        config.output_path = output;
    }

    initialize_logging_with_config(&config.log_level, &config.log_format)?;
    info!("Starting shot synthesizer (seed {})", config.seed);

    match run(&config) {
        Ok(count) => {
            info!("Wrote {} shots to {}", count, config.output_path.display());
            Ok(())
        }
        Err(e) => {
            error!("Shot synthesizer failed: {:#}", e);
            Err(e)
        }
    }
}

fn run(config: &SynthConfig) -> anyhow::Result<usize> {
    let plans = config.plans();
    let mut synth = ShotSynthesizer::from_seed(config.seed);
    let shots = run_plans(synth.rng(), &config.team, &plans).context("Shot synthesis failed")?;

    for line in zone_summary(&shots) {
        info!(
            "{} {:<22} {:>3}/{:<3} {:.3}",
            line.season,
            line.zone.label(),
            line.fgm,
            line.fga,
            line.fg_pct
        );
    }

    let count = shots.len();
    let envelope = Envelope::new(ShotChartData { shots }).with_source("synthetic");
    write_envelope(&config.output_path, &envelope)?;
    Ok(count)
}
