//! Split dimensions and their partition keys
//!
//! Each dimension maps a game to an optional key. `None` means the game lacks
//! what the dimension needs and is left out of that dimension only. Output rows
//! are ordered by the key's `Ord`, so every key type orders the way the table
//! should read (Home before Road, Wins before Losses, months by number).

use chrono::{Datelike, Month};
use game_log::{GameRecord, Location, Outcome};
use tracing::debug;

/// Rest days at or above this are reported in one bucket
pub const DAYS_REST_CAP: u32 = 6;

/// Key type for one split dimension
pub trait SplitKey: Ord + Clone {
    /// `GROUP_VALUE` label for this key
    fn group_value(&self) -> String;
}

/// Single partition holding every game
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Overall;

impl SplitKey for Overall {
    fn group_value(&self) -> String {
        "Overall".to_string()
    }
}

impl SplitKey for Location {
    fn group_value(&self) -> String {
        match self {
            Location::Home => "Home",
            Location::Road => "Road",
        }
        .to_string()
    }
}

impl SplitKey for Outcome {
    fn group_value(&self) -> String {
        match self {
            Outcome::Win => "Wins",
            Outcome::Loss => "Losses",
        }
        .to_string()
    }
}

/// Calendar month number, 1-12
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarMonth(pub u32);

impl SplitKey for CalendarMonth {
    fn group_value(&self) -> String {
        u8::try_from(self.0)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_else(|| format!("Month {}", self.0))
    }
}

/// Days off before a game, capped at [`DAYS_REST_CAP`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DaysRest(pub u32);

impl SplitKey for DaysRest {
    fn group_value(&self) -> String {
        if self.0 >= DAYS_REST_CAP {
            format!("{DAYS_REST_CAP}+ Days Rest")
        } else {
            format!("{} Days Rest", self.0)
        }
    }
}

/// Split dimensions produced for each season
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Overall,
    Location,
    WinLoss,
    Month,
    DaysRest,
}

impl Dimension {
    /// `GROUP_SET` label
    pub fn group_set(self) -> &'static str {
        match self {
            Dimension::Overall => "Overall",
            Dimension::Location => "Location",
            Dimension::WinLoss => "W/L",
            Dimension::Month => "Month",
            Dimension::DaysRest => "Days Rest",
        }
    }
}

pub fn overall_key(_game: &GameRecord) -> Option<Overall> {
    Some(Overall)
}

pub fn location_key(game: &GameRecord) -> Option<Location> {
    let location = game.location();
    if location.is_none() {
        debug!("Game {} has no home/road marker in '{}'", game.game_id, game.matchup);
    }
    location
}

pub fn win_loss_key(game: &GameRecord) -> Option<Outcome> {
    Some(game.outcome)
}

pub fn month_key(game: &GameRecord) -> Option<CalendarMonth> {
    match game.date() {
        Some(date) => Some(CalendarMonth(date.month())),
        None => {
            debug!("Game {} has unparseable date '{}'", game.game_id, game.game_date);
            None
        }
    }
}

/// Days-rest key for every game, index-aligned with `games`.
///
/// Games are ordered by date internally; input order does not matter. The
/// earliest game and games without a parseable date get `None`.
pub fn days_rest_keys(games: &[GameRecord]) -> Vec<Option<DaysRest>> {
    let mut dated: Vec<(usize, chrono::NaiveDate)> =
        games.iter().enumerate().filter_map(|(i, g)| g.date().map(|d| (i, d))).collect();
    dated.sort_by_key(|&(i, date)| (date, i));

    let mut keys = vec![None; games.len()];
    for pair in dated.windows(2) {
        let (_, previous) = pair[0];
        let (index, current) = pair[1];
        let rest = (current - previous).num_days() - 1;
        let rest = u32::try_from(rest.max(0)).unwrap_or(DAYS_REST_CAP).min(DAYS_REST_CAP);
        keys[index] = Some(DaysRest(rest));
    }
    keys
}
