//! Raw game-log rows to [`GameRecord`]
//!
//! The stats API and the sports-reference scrape name the same concept
//! differently. Every logical field has one ordered alias list below; the
//! first alias with a usable value wins. Null, blank and `nan` count as absent,
//! so a blank `TRB` on a DNP row still falls through to `OREB + DREB`.
//!
//! Only the season and the result are required. A row without a date or a
//! matchup is kept with that field empty, and the splits that need it skip
//! the game.
//!
//! | field        | aliases, in priority order         |
//! |--------------|------------------------------------|
//! | `SEASON`     | `SEASON`                           |
//! | `SEASON_TYPE`| `SEASON_TYPE`                      |
//! | `Game_ID`    | `Game_ID`, `GAME_ID`, `Rk`         |
//! | `GAME_DATE`  | `GAME_DATE`, `Date`                |
//! | `MATCHUP`    | `MATCHUP`                          |
//! | opponent     | `Opp`, `OPPONENT`                  |
//! | site marker  | `Unnamed: 5`, `Site`               |
//! | `WL`         | `WL`, `Result`                     |
//! | `MIN`        | `MIN`, `MP`                        |
//! | `FGM`/`FGA`  | `FGM`, `FG` / `FGA`                |
//! | `FG3M`/`FG3A`| `FG3M`, `3P` / `FG3A`, `3PA`       |
//! | `FTM`/`FTA`  | `FTM`, `FT` / `FTA`                |
//! | `OREB`/`DREB`| `OREB`, `ORB` / `DREB`, `DRB`      |
//! | `REB`        | `REB`, `TRB` (else `OREB + DREB`)  |
//! | `PLUS_MINUS` | `PLUS_MINUS`, `+/-`                |
//!
//! `AST`, `STL`, `BLK`, `TOV`, `PF` and `PTS` share their name across sources.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::GameLogError;
use crate::types::{BoxScore, GameRecord, Outcome};

pub mod aliases {
    pub const SEASON: &[&str] = &["SEASON"];
    pub const SEASON_TYPE: &[&str] = &["SEASON_TYPE"];
    pub const GAME_ID: &[&str] = &["Game_ID", "GAME_ID", "Rk"];
    pub const GAME_DATE: &[&str] = &["GAME_DATE", "Date"];
    pub const MATCHUP: &[&str] = &["MATCHUP"];
    pub const OPPONENT: &[&str] = &["Opp", "OPPONENT"];
    pub const SITE: &[&str] = &["Unnamed: 5", "Site"];
    pub const RESULT: &[&str] = &["WL", "Result"];
    pub const MIN: &[&str] = &["MIN", "MP"];
    pub const FGM: &[&str] = &["FGM", "FG"];
    pub const FGA: &[&str] = &["FGA"];
    pub const FG3M: &[&str] = &["FG3M", "3P"];
    pub const FG3A: &[&str] = &["FG3A", "3PA"];
    pub const FTM: &[&str] = &["FTM", "FT"];
    pub const FTA: &[&str] = &["FTA"];
    pub const OREB: &[&str] = &["OREB", "ORB"];
    pub const DREB: &[&str] = &["DREB", "DRB"];
    pub const REB: &[&str] = &["REB", "TRB"];
    pub const AST: &[&str] = &["AST"];
    pub const STL: &[&str] = &["STL"];
    pub const BLK: &[&str] = &["BLK"];
    pub const TOV: &[&str] = &["TOV"];
    pub const PF: &[&str] = &["PF"];
    pub const PTS: &[&str] = &["PTS"];
    pub const PLUS_MINUS: &[&str] = &["PLUS_MINUS", "+/-"];
}

/// First usable value among `keys`
pub fn lookup<'a>(row: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().filter_map(|key| row.get(*key)).find(|value| !is_absent(value))
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let s = s.trim();
            s.is_empty() || s.eq_ignore_ascii_case("nan")
        }
        _ => false,
    }
}

/// Lenient number: JSON numbers and numeric strings parse, anything else is 0
pub fn number(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Minutes played; accepts `"29:06"` (rounded to 0.1) or a plain number
pub fn minutes(value: Option<&Value>) -> f64 {
    if let Some(Value::String(s)) = value {
        if let Some((mins, secs)) = s.trim().split_once(':') {
            let mins = mins.trim().parse::<f64>().unwrap_or(0.0);
            let secs = secs.trim().parse::<f64>().unwrap_or(0.0);
            return ((mins + secs / 60.0) * 10.0).round() / 10.0;
        }
    }
    number(value)
}

fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => {
            let s = s.trim();
            (!s.is_empty() && !s.eq_ignore_ascii_case("nan")).then(|| s.to_string())
        }
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Converts raw rows from either source into [`GameRecord`]s
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Team abbreviation used when a matchup has to be rebuilt (e.g., "DEN")
    pub team: String,
    /// Season label for rows that do not carry one
    pub season: Option<String>,
    /// Season type for rows that do not carry one
    pub season_type: Option<String>,
}

impl Normalizer {
    pub fn new(team: impl Into<String>) -> Self {
        Self { team: team.into(), season: None, season_type: None }
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn with_season_type(mut self, season_type: impl Into<String>) -> Self {
        self.season_type = Some(season_type.into());
        self
    }

    /// Normalize one raw row
    pub fn normalize_row(&self, row: &Value) -> Result<GameRecord, GameLogError> {
        let row = row.as_object().ok_or(GameLogError::NotAnObject)?;

        let season = text(lookup(row, aliases::SEASON))
            .or_else(|| self.season.clone())
            .ok_or(GameLogError::MissingField { field: "SEASON" })?;

        let season_type = text(lookup(row, aliases::SEASON_TYPE))
            .or_else(|| self.season_type.clone())
            .unwrap_or_default();

        let game_id = text(lookup(row, aliases::GAME_ID)).unwrap_or_default();

        let game_date = text(lookup(row, aliases::GAME_DATE)).unwrap_or_else(|| {
            debug!("Game {} has no date", game_id);
            String::new()
        });

        let matchup = self.matchup(row).unwrap_or_else(|| {
            debug!("Game {} has no matchup or opponent", game_id);
            String::new()
        });

        let raw_result = text(lookup(row, aliases::RESULT))
            .ok_or(GameLogError::MissingField { field: "WL" })?;
        let outcome = Outcome::parse(&raw_result)
            .ok_or(GameLogError::InvalidField { field: "WL", value: raw_result.clone() })?;

        let stats = box_score(row);
        stats.validate()?;

        Ok(GameRecord { season, season_type, game_id, game_date, matchup, outcome, stats })
    }

    /// Normalize a batch, logging and skipping rows that fail.
    pub fn normalize_rows(&self, rows: &[Value]) -> Vec<GameRecord> {
        let mut records = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;

        for (index, row) in rows.iter().enumerate() {
            match self.normalize_row(row) {
                Ok(record) => records.push(record),
                Err(e) => {
                    skipped += 1;
                    warn!("Skipping game row {}: {}", index, e);
                }
            }
        }

        debug!("Normalized {} game rows, skipped {}", records.len(), skipped);
        records
    }

    /// Use the row's matchup, or rebuild it from opponent + site marker
    fn matchup(&self, row: &Map<String, Value>) -> Option<String> {
        if let Some(matchup) = text(lookup(row, aliases::MATCHUP)) {
            return Some(matchup);
        }

        let opponent = text(lookup(row, aliases::OPPONENT))?;
        let is_road = text(lookup(row, aliases::SITE)).is_some_and(|site| site == "@");
        let marker = if is_road { "@" } else { "vs." };

        Some(format!("{} {} {}", self.team, marker, opponent))
    }
}

fn box_score(row: &Map<String, Value>) -> BoxScore {
    let oreb = number(lookup(row, aliases::OREB));
    let dreb = number(lookup(row, aliases::DREB));
    let reb = lookup(row, aliases::REB).map(|v| number(Some(v))).unwrap_or(oreb + dreb);

    BoxScore {
        min: minutes(lookup(row, aliases::MIN)),
        fgm: number(lookup(row, aliases::FGM)),
        fga: number(lookup(row, aliases::FGA)),
        fg3m: number(lookup(row, aliases::FG3M)),
        fg3a: number(lookup(row, aliases::FG3A)),
        ftm: number(lookup(row, aliases::FTM)),
        fta: number(lookup(row, aliases::FTA)),
        oreb,
        dreb,
        reb,
        ast: number(lookup(row, aliases::AST)),
        stl: number(lookup(row, aliases::STL)),
        blk: number(lookup(row, aliases::BLK)),
        tov: number(lookup(row, aliases::TOV)),
        pf: number(lookup(row, aliases::PF)),
        pts: number(lookup(row, aliases::PTS)),
        plus_minus: number(lookup(row, aliases::PLUS_MINUS)),
    }
}
