use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::zones::{ShotArea, ShotType, ShotZone};

/// A game that synthesized shots can be attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateGame {
    pub game_id: String,
    #[serde(with = "compact_date")]
    pub date: NaiveDate,
    pub matchup: String,
}

/// One synthesized shot attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotEvent {
    #[serde(rename = "SEASON")]
    pub season: String,
    #[serde(rename = "GAME_ID")]
    pub game_id: String,
    #[serde(rename = "GAME_DATE", with = "compact_date")]
    pub game_date: NaiveDate,
    #[serde(rename = "LOC_X")]
    pub loc_x: i32,
    #[serde(rename = "LOC_Y")]
    pub loc_y: i32,
    #[serde(rename = "SHOT_MADE_FLAG")]
    pub shot_made_flag: u8,
    #[serde(rename = "SHOT_TYPE")]
    pub shot_type: ShotType,
    #[serde(rename = "SHOT_ZONE_BASIC")]
    pub shot_zone_basic: ShotZone,
    #[serde(rename = "SHOT_ZONE_AREA")]
    pub shot_zone_area: ShotArea,
    #[serde(rename = "SHOT_DISTANCE")]
    pub shot_distance: i32,
    #[serde(rename = "ACTION_TYPE")]
    pub action_type: String,
    #[serde(rename = "MATCHUP")]
    pub matchup: String,
}

impl ShotEvent {
    pub fn is_made(&self) -> bool {
        self.shot_made_flag == 1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotChartData {
    pub shots: Vec<ShotEvent>,
}

/// Shooting line for one (season, zone) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneSummary {
    #[serde(rename = "SEASON")]
    pub season: String,
    #[serde(rename = "SHOT_ZONE_BASIC")]
    pub zone: ShotZone,
    #[serde(rename = "FGM")]
    pub fgm: u32,
    #[serde(rename = "FGA")]
    pub fga: u32,
    #[serde(rename = "FG_PCT")]
    pub fg_pct: f64,
}

/// `GAME_DATE` as `YYYYMMDD`
pub mod compact_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y%m%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
