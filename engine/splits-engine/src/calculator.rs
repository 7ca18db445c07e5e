use std::collections::BTreeMap;

use game_log::GameRecord;

use crate::models::{SplitGroup, SplitStats};
use crate::partition::SplitKey;

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Combined ratio: summed makes over summed attempts, 3 places, 0 when no attempts.
///
/// Never pass per-game percentages here; averaging those weights a 1-for-1
/// night the same as a 1-for-10 night.
pub fn combined_pct(makes: f64, attempts: f64) -> f64 {
    if attempts > 0.0 {
        round_to(makes / attempts, 3)
    } else {
        0.0
    }
}

/// Running sums over one partition
#[derive(Debug, Clone, Default)]
struct Totals {
    games: u32,
    wins: u32,
    min: f64,
    fgm: f64,
    fga: f64,
    fg3m: f64,
    fg3a: f64,
    ftm: f64,
    fta: f64,
    oreb: f64,
    dreb: f64,
    reb: f64,
    ast: f64,
    tov: f64,
    stl: f64,
    blk: f64,
    pf: f64,
    pts: f64,
    plus_minus: f64,
}

impl Totals {
    fn add(&mut self, game: &GameRecord) {
        let s = &game.stats;
        self.games += 1;
        if game.is_win() {
            self.wins += 1;
        }
        self.min += s.min;
        self.fgm += s.fgm;
        self.fga += s.fga;
        self.fg3m += s.fg3m;
        self.fg3a += s.fg3a;
        self.ftm += s.ftm;
        self.fta += s.fta;
        self.oreb += s.oreb;
        self.dreb += s.dreb;
        self.reb += s.reb;
        self.ast += s.ast;
        self.tov += s.tov;
        self.stl += s.stl;
        self.blk += s.blk;
        self.pf += s.pf;
        self.pts += s.pts;
        self.plus_minus += s.plus_minus;
    }

    /// Only called on non-empty partitions
    fn into_stats(self) -> SplitStats {
        let gp = f64::from(self.games);
        let avg = |total: f64| round_to(total / gp, 1);

        SplitStats {
            gp: self.games,
            w: self.wins,
            l: self.games - self.wins,
            w_pct: round_to(f64::from(self.wins) / gp, 3),
            min: avg(self.min),
            fgm: avg(self.fgm),
            fga: avg(self.fga),
            fg_pct: combined_pct(self.fgm, self.fga),
            fg3m: avg(self.fg3m),
            fg3a: avg(self.fg3a),
            fg3_pct: combined_pct(self.fg3m, self.fg3a),
            ftm: avg(self.ftm),
            fta: avg(self.fta),
            ft_pct: combined_pct(self.ftm, self.fta),
            oreb: avg(self.oreb),
            dreb: avg(self.dreb),
            reb: avg(self.reb),
            ast: avg(self.ast),
            tov: avg(self.tov),
            stl: avg(self.stl),
            blk: avg(self.blk),
            pf: avg(self.pf),
            pts: avg(self.pts),
            plus_minus: avg(self.plus_minus),
        }
    }
}

/// Aggregate games that already carry their partition key.
///
/// Games keyed `None` are left out. Partitions with no games produce no row.
/// Rows come back in key order.
pub fn aggregate_keyed<'a, K, I>(group_set: &str, keyed: I) -> Vec<SplitGroup>
where
    K: SplitKey,
    I: IntoIterator<Item = (&'a GameRecord, Option<K>)>,
{
    let mut partitions: BTreeMap<K, Totals> = BTreeMap::new();
    for (game, key) in keyed {
        if let Some(key) = key {
            partitions.entry(key).or_default().add(game);
        }
    }

    partitions
        .into_iter()
        .map(|(key, totals)| SplitGroup {
            group_set: group_set.to_string(),
            group_value: key.group_value(),
            stats: totals.into_stats(),
        })
        .collect()
}

/// Partition `games` with `partition_key` and aggregate every non-empty partition
pub fn aggregate<K, F>(games: &[GameRecord], group_set: &str, partition_key: F) -> Vec<SplitGroup>
where
    K: SplitKey,
    F: Fn(&GameRecord) -> Option<K>,
{
    aggregate_keyed(group_set, games.iter().map(|game| (game, partition_key(game))))
}
