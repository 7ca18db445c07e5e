//! Candidate-game schedules for synthetic seasons

use chrono::NaiveDate;
use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::error::SynthError;
use crate::models::CandidateGame;

/// Opponent pool: every franchise except Denver
pub const OPPONENTS: [&str; 29] = [
    "LAL", "GSW", "PHX", "LAC", "MIN", "OKC", "BOS", "MIL", "NYK", "PHI", "MIA", "SAC", "DAL",
    "HOU", "SAS", "POR", "UTA", "CLE", "ATL", "CHI", "DET", "IND", "TOR", "CHA", "WAS", "ORL",
    "BKN", "MEM", "NOP",
];

/// Inclusive range of dates games may fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl SeasonWindow {
    fn new(first: (i32, u32, u32), last: (i32, u32, u32)) -> Option<Self> {
        Some(Self {
            first: NaiveDate::from_ymd_opt(first.0, first.1, first.2)?,
            last: NaiveDate::from_ymd_opt(last.0, last.1, last.2)?,
        })
    }

    /// Every date in the window, ascending
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.first.iter_days().take_while(|d| *d <= self.last).collect()
    }
}

/// Start year of a `YYYY-YY` season label
pub fn season_start_year(season: &str) -> Result<i32, SynthError> {
    let invalid = || SynthError::InvalidSeason(season.to_string());
    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = start.parse().map_err(|_| invalid())?;
    let next: i32 = end.parse().map_err(|_| invalid())?;
    if (year + 1) % 100 != next {
        return Err(invalid());
    }
    Ok(year)
}

/// Dates games can be scheduled on for `season`.
///
/// Known seasons use their real opening night and cutoff; anything else gets
/// Oct 20 through Apr 10.
pub fn season_window(season: &str) -> Result<SeasonWindow, SynthError> {
    let year = season_start_year(season)?;
    let window = match season {
        "2024-25" => SeasonWindow::new((2024, 10, 22), (2025, 2, 22)),
        "2023-24" => SeasonWindow::new((2023, 10, 24), (2024, 4, 14)),
        "2022-23" => SeasonWindow::new((2022, 10, 19), (2023, 4, 9)),
        _ => SeasonWindow::new((year, 10, 20), (year + 1, 4, 10)),
    };
    window.ok_or_else(|| SynthError::InvalidSeason(season.to_string()))
}

/// `002` + last three digits of the start year + `0` + 4-digit sequence
pub fn game_id(season: &str, sequence: u32) -> Result<String, SynthError> {
    let year = season_start_year(season)?;
    Ok(format!("002{:03}0{:04}", year % 1000, sequence))
}

/// Draw `min(num_games, window days)` distinct dates and attach ids and
/// matchups. Games come back in date order.
pub fn generate_schedule<R: Rng + ?Sized>(
    rng: &mut R,
    team: &str,
    season: &str,
    num_games: usize,
    id_offset: u32,
) -> Result<Vec<CandidateGame>, SynthError> {
    let all_dates = season_window(season)?.dates();
    let amount = num_games.min(all_dates.len());

    let mut chosen: Vec<NaiveDate> = index::sample(rng, all_dates.len(), amount)
        .into_iter()
        .map(|i| all_dates[i])
        .collect();
    chosen.sort();

    let mut games = Vec::with_capacity(chosen.len());
    for (i, date) in (0u32..).zip(chosen) {
        let opponent = OPPONENTS[rng.gen_range(0..OPPONENTS.len())];
        let matchup = if rng.gen_bool(0.5) {
            format!("{team} vs. {opponent}")
        } else {
            format!("{team} @ {opponent}")
        };
        games.push(CandidateGame {
            game_id: game_id(season, id_offset + i)?,
            date,
            matchup,
        });
    }

    debug!(
        "Scheduled {} games for {} between {} and {}",
        games.len(),
        season,
        games.first().map(|g| g.date.to_string()).unwrap_or_default(),
        games.last().map(|g| g.date.to_string()).unwrap_or_default()
    );
    Ok(games)
}
