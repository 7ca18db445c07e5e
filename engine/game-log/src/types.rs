use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GameLogError;

/// Date layouts seen in game logs, tried in order.
/// Sports-reference writes `2024-01-15`, the stats API writes `JAN 15, 2024`.
pub const GAME_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%b %d, %Y", "%Y%m%d"];

/// Result of a game from the tracked player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    /// Parse a result string such as `W`, `L`, `W (+12)` or `L, 95-110`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().chars().next()? {
            'W' | 'w' => Some(Outcome::Win),
            'L' | 'l' => Some(Outcome::Loss),
            _ => None,
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Outcome::Win)
    }
}

/// Game location relative to the tracked player's team
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Home,
    Road,
}

impl Location {
    /// Derive the location from a matchup such as `DEN vs. LAL` or `DEN @ LAL`
    pub fn from_matchup(matchup: &str) -> Option<Self> {
        if matchup.contains("vs.") {
            Some(Location::Home)
        } else if matchup.contains('@') {
            Some(Location::Road)
        } else {
            None
        }
    }
}

/// Counting stats from one box score line.
///
/// Field names on the wire match the stats API game log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxScore {
    #[serde(rename = "MIN")]
    pub min: f64,
    #[serde(rename = "FGM")]
    pub fgm: f64,
    #[serde(rename = "FGA")]
    pub fga: f64,
    #[serde(rename = "FG3M")]
    pub fg3m: f64,
    #[serde(rename = "FG3A")]
    pub fg3a: f64,
    #[serde(rename = "FTM")]
    pub ftm: f64,
    #[serde(rename = "FTA")]
    pub fta: f64,
    #[serde(rename = "OREB")]
    pub oreb: f64,
    #[serde(rename = "DREB")]
    pub dreb: f64,
    #[serde(rename = "REB")]
    pub reb: f64,
    #[serde(rename = "AST")]
    pub ast: f64,
    #[serde(rename = "STL")]
    pub stl: f64,
    #[serde(rename = "BLK")]
    pub blk: f64,
    #[serde(rename = "TOV")]
    pub tov: f64,
    #[serde(rename = "PF")]
    pub pf: f64,
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "PLUS_MINUS")]
    pub plus_minus: f64,
}

impl BoxScore {
    /// Check the makes/attempts and minutes invariants
    pub fn validate(&self) -> Result<(), GameLogError> {
        if self.min < 0.0 {
            return Err(GameLogError::NegativeMinutes(self.min));
        }

        for (field, makes, attempts) in [
            ("FG", self.fgm, self.fga),
            ("FG3", self.fg3m, self.fg3a),
            ("FT", self.ftm, self.fta),
        ] {
            if makes > attempts {
                return Err(GameLogError::MakesExceedAttempts { field, makes, attempts });
            }
        }

        Ok(())
    }
}

/// One game played by the tracked player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Season label (e.g., "2024-25")
    #[serde(rename = "SEASON")]
    pub season: String,
    /// "Regular Season" or "Playoffs"
    #[serde(rename = "SEASON_TYPE", default)]
    pub season_type: String,
    #[serde(rename = "Game_ID", default)]
    pub game_id: String,
    /// Game date exactly as the source wrote it
    #[serde(rename = "GAME_DATE")]
    pub game_date: String,
    /// Matchup string (e.g., "DEN vs. LAL")
    #[serde(rename = "MATCHUP")]
    pub matchup: String,
    #[serde(rename = "WL")]
    pub outcome: Outcome,
    #[serde(flatten)]
    pub stats: BoxScore,
}

impl GameRecord {
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }

    /// Home/road split for this game; `None` when the matchup carries neither marker
    pub fn location(&self) -> Option<Location> {
        Location::from_matchup(&self.matchup)
    }

    /// Parsed game date; `None` when the source date is malformed
    pub fn date(&self) -> Option<NaiveDate> {
        parse_game_date(&self.game_date)
    }
}

/// Parse a game date in any of [`GAME_DATE_FORMATS`]
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    GAME_DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_parse() {
        assert_eq!(Outcome::parse("W"), Some(Outcome::Win));
        assert_eq!(Outcome::parse("L"), Some(Outcome::Loss));
        assert_eq!(Outcome::parse("W (+12)"), Some(Outcome::Win));
        assert_eq!(Outcome::parse(" L, 95-110"), Some(Outcome::Loss));
        assert_eq!(Outcome::parse(""), None);
        assert_eq!(Outcome::parse("T"), None);
    }

    #[test]
    fn test_location_from_matchup() {
        assert_eq!(Location::from_matchup("DEN vs. LAL"), Some(Location::Home));
        assert_eq!(Location::from_matchup("DEN @ LAL"), Some(Location::Road));
        assert_eq!(Location::from_matchup("DEN LAL"), None);
    }

    #[test]
    fn test_parse_game_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_game_date("2024-01-15"), expected);
        assert_eq!(parse_game_date("JAN 15, 2024"), expected);
        assert_eq!(parse_game_date("20240115"), expected);
        assert_eq!(parse_game_date("15/01/2024"), None);
        assert_eq!(parse_game_date(""), None);
    }

    #[test]
    fn test_box_score_validation() {
        let ok = BoxScore { min: 30.0, fgm: 5.0, fga: 10.0, ..Default::default() };
        assert!(ok.validate().is_ok());

        let bad = BoxScore { fg3m: 3.0, fg3a: 2.0, ..Default::default() };
        assert!(matches!(
            bad.validate(),
            Err(GameLogError::MakesExceedAttempts { field: "FG3", .. })
        ));

        let negative = BoxScore { min: -1.0, ..Default::default() };
        assert_eq!(negative.validate(), Err(GameLogError::NegativeMinutes(-1.0)));
    }

    #[test]
    fn test_game_record_serializes_wire_names() {
        let record = GameRecord {
            season: "2024-25".to_string(),
            season_type: "Regular Season".to_string(),
            game_id: "0022400101".to_string(),
            game_date: "2024-10-24".to_string(),
            matchup: "DEN vs. OKC".to_string(),
            outcome: Outcome::Loss,
            stats: BoxScore { pts: 12.0, ..Default::default() },
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["WL"], "L");
        assert_eq!(json["PTS"], 12.0);
        assert_eq!(json["MATCHUP"], "DEN vs. OKC");

        let back: GameRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
