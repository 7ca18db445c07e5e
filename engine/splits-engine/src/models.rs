use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate row for one split group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitStats {
    /// Games played
    #[serde(rename = "GP")]
    pub gp: u32,
    #[serde(rename = "W")]
    pub w: u32,
    #[serde(rename = "L")]
    pub l: u32,
    #[serde(rename = "W_PCT")]
    pub w_pct: f64,
    #[serde(rename = "MIN")]
    pub min: f64,
    #[serde(rename = "FGM")]
    pub fgm: f64,
    #[serde(rename = "FGA")]
    pub fga: f64,
    #[serde(rename = "FG_PCT")]
    pub fg_pct: f64,
    #[serde(rename = "FG3M")]
    pub fg3m: f64,
    #[serde(rename = "FG3A")]
    pub fg3a: f64,
    #[serde(rename = "FG3_PCT")]
    pub fg3_pct: f64,
    #[serde(rename = "FTM")]
    pub ftm: f64,
    #[serde(rename = "FTA")]
    pub fta: f64,
    #[serde(rename = "FT_PCT")]
    pub ft_pct: f64,
    #[serde(rename = "OREB")]
    pub oreb: f64,
    #[serde(rename = "DREB")]
    pub dreb: f64,
    #[serde(rename = "REB")]
    pub reb: f64,
    #[serde(rename = "AST")]
    pub ast: f64,
    #[serde(rename = "TOV")]
    pub tov: f64,
    #[serde(rename = "STL")]
    pub stl: f64,
    #[serde(rename = "BLK")]
    pub blk: f64,
    #[serde(rename = "PF")]
    pub pf: f64,
    #[serde(rename = "PTS")]
    pub pts: f64,
    #[serde(rename = "PLUS_MINUS")]
    pub plus_minus: f64,
}

/// A named partition paired with its aggregate row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitGroup {
    /// Dimension name (e.g., "Location")
    #[serde(rename = "GROUP_SET")]
    pub group_set: String,
    /// Partition label within the dimension (e.g., "Home")
    #[serde(rename = "GROUP_VALUE")]
    pub group_value: String,
    #[serde(flatten)]
    pub stats: SplitStats,
}

/// All split tables for one season
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSplits {
    pub overall: Vec<SplitGroup>,
    pub location: Vec<SplitGroup>,
    pub win_loss: Vec<SplitGroup>,
    pub month: Vec<SplitGroup>,
    /// Needs the All-Star break date, which the game log does not carry
    pub pre_post_allstar: Vec<SplitGroup>,
    /// Needs games-started data, which the game log does not carry
    pub starter_bench: Vec<SplitGroup>,
    pub days_rest: Vec<SplitGroup>,
}

/// Season label -> split tables, as written to `general_splits.json`
pub type GeneralSplits = BTreeMap<String, SeasonSplits>;

/// Raw game log payload as read from `game_log.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawGameLog {
    pub games: Vec<serde_json::Value>,
}
