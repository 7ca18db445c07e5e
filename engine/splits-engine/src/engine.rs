use std::collections::BTreeMap;

use anyhow::Context;
use game_log::{read_envelope, write_envelope, Envelope, GameRecord, Normalizer};
use tracing::{info, warn};

use crate::calculator::{aggregate, aggregate_keyed};
use crate::config::SplitsConfig;
use crate::models::{GeneralSplits, RawGameLog, SeasonSplits};
use crate::partition::{self, Dimension};

/// Builds per-season split tables from a game log
pub struct SplitsEngine {
    config: SplitsConfig,
}

impl SplitsEngine {
    pub fn new(config: SplitsConfig) -> Self {
        Self { config }
    }

    /// Every split table for one season's games
    pub fn season_splits(&self, games: &[GameRecord]) -> SeasonSplits {
        let days_rest = partition::days_rest_keys(games);

        SeasonSplits {
            overall: aggregate(games, Dimension::Overall.group_set(), partition::overall_key),
            location: aggregate(games, Dimension::Location.group_set(), partition::location_key),
            win_loss: aggregate(games, Dimension::WinLoss.group_set(), partition::win_loss_key),
            month: aggregate(games, Dimension::Month.group_set(), partition::month_key),
            pre_post_allstar: Vec::new(),
            starter_bench: Vec::new(),
            days_rest: aggregate_keyed(Dimension::DaysRest.group_set(), games.iter().zip(days_rest)),
        }
    }

    /// Group games by season (after the season-type filter) and build each season's tables.
    /// Seasons without games do not appear.
    pub fn build(&self, games: &[GameRecord]) -> GeneralSplits {
        let mut by_season: BTreeMap<&str, Vec<GameRecord>> = BTreeMap::new();
        for game in games.iter().filter(|g| self.includes(g)) {
            by_season.entry(game.season.as_str()).or_default().push(game.clone());
        }

        by_season
            .into_iter()
            .map(|(season, season_games)| {
                info!("Computing splits for {} ({} games)", season, season_games.len());
                (season.to_string(), self.season_splits(&season_games))
            })
            .collect()
    }

    /// Read the configured game log, build splits and write them out
    pub fn run(&self) -> anyhow::Result<GeneralSplits> {
        info!("Reading game log from {}", self.config.input_path.display());
        let input: Envelope<RawGameLog> =
            read_envelope(&self.config.input_path).context("Failed to load game log")?;

        let normalizer = Normalizer::new(self.config.team.clone());
        let games = normalizer.normalize_rows(&input.data.games);
        if games.len() < input.data.games.len() {
            warn!(
                "{} of {} game rows were unusable",
                input.data.games.len() - games.len(),
                input.data.games.len()
            );
        }

        let splits = self.build(&games);
        info!("Built splits for {} seasons from {} games", splits.len(), games.len());

        let mut output = Envelope::new(splits);
        if let Some(source) = input.meta.source {
            output = output.with_source(source);
        }
        write_envelope(&self.config.output_path, &output).context("Failed to write splits")?;

        Ok(output.data)
    }

    fn includes(&self, game: &GameRecord) -> bool {
        self.config.season_type.as_deref().map_or(true, |wanted| game.season_type == wanted)
    }
}
