//! Season plans: the targets a full synthesis run works from

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SynthError;
use crate::models::{ShotEvent, ZoneSummary};
use crate::schedule::generate_schedule;
use crate::synthesizer::synthesize;
use crate::zones::ShotZone;

/// Shot volume and make rate for one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneTarget {
    pub zone: ShotZone,
    pub count: i64,
    pub make_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonPlan {
    pub season: String,
    /// Number of candidate games to schedule
    pub games: usize,
    /// First sequence number used in generated game ids
    pub game_id_offset: u32,
    pub targets: Vec<ZoneTarget>,
}

impl SeasonPlan {
    fn with_targets(
        season: &str,
        games: usize,
        game_id_offset: u32,
        counts: [i64; 6],
        make_pcts: [f64; 6],
    ) -> Self {
        let targets = ShotZone::ALL
            .iter()
            .zip(counts.iter().zip(make_pcts.iter()))
            .map(|(&zone, (&count, &make_pct))| ZoneTarget {
                zone,
                count,
                make_pct,
            })
            .collect();
        Self {
            season: season.to_string(),
            games,
            game_id_offset,
            targets,
        }
    }

    pub fn total_shots(&self) -> i64 {
        self.targets.iter().map(|t| t.count.max(0)).sum()
    }
}

/// Three seasons of a high-volume interior scorer, newest first
pub fn default_plans() -> Vec<SeasonPlan> {
    vec![
        SeasonPlan::with_targets(
            "2024-25",
            55,
            100,
            [175, 100, 120, 55, 60, 155],
            [0.72, 0.44, 0.41, 0.40, 0.45, 0.32],
        ),
        SeasonPlan::with_targets(
            "2023-24",
            65,
            200,
            [40, 20, 15, 8, 7, 10],
            [0.68, 0.40, 0.38, 0.35, 0.36, 0.28],
        ),
        SeasonPlan::with_targets(
            "2022-23",
            50,
            300,
            [25, 10, 7, 3, 2, 3],
            [0.70, 0.42, 0.36, 0.33, 0.33, 0.25],
        ),
    ]
}

/// Synthesize every plan into one chart ordered by game date.
///
/// Shots are shuffled before the stable date sort so zones interleave within
/// a game day.
pub fn run_plans<R: Rng + ?Sized>(
    rng: &mut R,
    team: &str,
    plans: &[SeasonPlan],
) -> Result<Vec<ShotEvent>, SynthError> {
    let mut shots = Vec::new();

    for plan in plans {
        let games = generate_schedule(rng, team, &plan.season, plan.games, plan.game_id_offset)?;
        let before = shots.len();
        for target in &plan.targets {
            shots.extend(synthesize(
                rng,
                target.zone,
                target.count,
                target.make_pct,
                &plan.season,
                &games,
            )?);
        }
        info!(
            "Season {}: {} shots across {} games",
            plan.season,
            shots.len() - before,
            games.len()
        );
    }

    shots.shuffle(rng);
    shots.sort_by_key(|shot| shot.game_date);
    Ok(shots)
}

/// FGM / FGA / FG_PCT per (season, zone)
pub fn zone_summary(shots: &[ShotEvent]) -> Vec<ZoneSummary> {
    let mut totals: BTreeMap<(&str, ShotZone), (u32, u32)> = BTreeMap::new();
    for shot in shots {
        let entry = totals
            .entry((shot.season.as_str(), shot.shot_zone_basic))
            .or_default();
        entry.0 += u32::from(shot.shot_made_flag);
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|((season, zone), (fgm, fga))| ZoneSummary {
            season: season.to_string(),
            zone,
            fgm,
            fga,
            fg_pct: if fga == 0 {
                0.0
            } else {
                (f64::from(fgm) / f64::from(fga) * 1000.0).round() / 1000.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_plans_cover_every_zone() {
        let plans = default_plans();
        assert_eq!(plans.len(), 3);
        for plan in &plans {
            let zones: Vec<ShotZone> = plan.targets.iter().map(|t| t.zone).collect();
            assert_eq!(zones, ShotZone::ALL.to_vec());
        }
        assert_eq!(plans[0].total_shots(), 665);
        assert_eq!(plans[1].total_shots(), 100);
        assert_eq!(plans[2].total_shots(), 50);
    }

    #[test]
    fn test_run_plans_sorted_by_date() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let shots = run_plans(&mut rng, "DEN", &default_plans()).unwrap();
        assert_eq!(shots.len(), 815);
        assert!(shots.windows(2).all(|w| w[0].game_date <= w[1].game_date));
        assert!(shots.iter().all(|s| s.matchup.starts_with("DEN")));
    }

    #[test]
    fn test_run_plans_is_reproducible() {
        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            run_plans(&mut rng, "DEN", &default_plans()).unwrap()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_run_plans_propagates_bad_targets() {
        let mut plans = default_plans();
        plans[1].targets[2].make_pct = 1.2;
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            run_plans(&mut rng, "DEN", &plans),
            Err(SynthError::InvalidProbability(1.2))
        );

        let mut plans = default_plans();
        plans[0].games = 0;
        assert_eq!(
            run_plans(&mut rng, "DEN", &plans),
            Err(SynthError::EmptyGamePool)
        );
    }

    #[test]
    fn test_zone_summary_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let shots = run_plans(&mut rng, "DEN", &default_plans()).unwrap();
        let summary = zone_summary(&shots);
        assert_eq!(summary.len(), 18);

        let ra = summary
            .iter()
            .find(|s| s.season == "2024-25" && s.zone == ShotZone::RestrictedArea)
            .unwrap();
        assert_eq!(ra.fga, 175);
        let made = shots
            .iter()
            .filter(|s| s.season == "2024-25" && s.shot_zone_basic == ShotZone::RestrictedArea)
            .filter(|s| s.is_made())
            .count();
        assert_eq!(ra.fgm as usize, made);
        assert_eq!(ra.fg_pct, (made as f64 / 175.0 * 1000.0).round() / 1000.0);

        // seasons ascend, zones follow court order within a season
        assert_eq!(summary[0].season, "2022-23");
        assert_eq!(summary[0].zone, ShotZone::RestrictedArea);
        assert_eq!(summary[5].zone, ShotZone::AboveTheBreak3);
    }

    #[test]
    fn test_plan_toml_shape() {
        let plan: SeasonPlan = serde_json::from_value(serde_json::json!({
            "season": "2021-22",
            "games": 10,
            "game_id_offset": 400,
            "targets": [{"zone": "Mid-Range", "count": 12, "make_pct": 0.4}]
        }))
        .unwrap();
        assert_eq!(plan.targets[0].zone, ShotZone::MidRange);
        assert_eq!(plan.total_shots(), 12);
    }
}
