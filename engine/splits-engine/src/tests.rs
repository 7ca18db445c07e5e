//! Property tests for split aggregation over generated game logs

use game_log::{BoxScore, GameRecord, Outcome};
use proptest::prelude::*;

use crate::calculator::{aggregate, round_to};
use crate::partition::{location_key, month_key, overall_key, win_loss_key};
use crate::{SplitGroup, SplitsConfig, SplitsEngine};

fn arb_game() -> impl Strategy<Value = GameRecord> {
    (
        1u32..=12,
        1u32..=28,
        any::<bool>(),
        any::<bool>(),
        (0u32..=20, 0u32..=10),
        (0u32..=10, 0u32..=5),
        (0u32..=10, 0u32..=10),
        0u32..=40,
    )
        .prop_map(|(month, day, home, win, (fga, fg_miss), (fg3a, fg3_miss), (fta, ft_miss), pts)| {
            let fgm = fga.saturating_sub(fg_miss);
            let fg3m = fg3a.saturating_sub(fg3_miss);
            let ftm = fta.saturating_sub(ft_miss);
            GameRecord {
                season: "2023-24".to_string(),
                season_type: "Regular Season".to_string(),
                game_id: format!("{month}-{day}"),
                game_date: format!("2024-{month:02}-{day:02}"),
                matchup: if home { "DEN vs. SAC" } else { "DEN @ SAC" }.to_string(),
                outcome: if win { Outcome::Win } else { Outcome::Loss },
                stats: BoxScore {
                    min: 24.0,
                    fgm: f64::from(fgm),
                    fga: f64::from(fga),
                    fg3m: f64::from(fg3m),
                    fg3a: f64::from(fg3a),
                    ftm: f64::from(ftm),
                    fta: f64::from(fta),
                    pts: f64::from(pts),
                    ..Default::default()
                },
            }
        })
}

fn all_rows(games: &[GameRecord]) -> Vec<SplitGroup> {
    let mut rows = aggregate(games, "Overall", overall_key);
    rows.extend(aggregate(games, "Location", location_key));
    rows.extend(aggregate(games, "W/L", win_loss_key));
    rows.extend(aggregate(games, "Month", month_key));
    rows
}

fn expected_pct(makes: f64, attempts: f64) -> f64 {
    if attempts > 0.0 {
        round_to(makes / attempts, 3)
    } else {
        0.0
    }
}

proptest! {
    #[test]
    fn prop_wins_plus_losses_is_games_played(games in prop::collection::vec(arb_game(), 0..40)) {
        for row in all_rows(&games) {
            prop_assert!(row.stats.gp > 0);
            prop_assert_eq!(row.stats.w + row.stats.l, row.stats.gp);
            let expected = f64::from(row.stats.w) / f64::from(row.stats.gp);
            prop_assert_eq!(row.stats.w_pct, round_to(expected, 3));
        }
    }

    #[test]
    fn prop_overall_pct_is_combined_ratio(games in prop::collection::vec(arb_game(), 1..40)) {
        let rows = aggregate(&games, "Overall", overall_key);
        prop_assert_eq!(rows.len(), 1);

        let sum = |f: fn(&BoxScore) -> f64| games.iter().map(|g| f(&g.stats)).sum::<f64>();
        let stats = &rows[0].stats;
        prop_assert_eq!(stats.fg_pct, expected_pct(sum(|s| s.fgm), sum(|s| s.fga)));
        prop_assert_eq!(stats.fg3_pct, expected_pct(sum(|s| s.fg3m), sum(|s| s.fg3a)));
        prop_assert_eq!(stats.ft_pct, expected_pct(sum(|s| s.ftm), sum(|s| s.fta)));
    }

    #[test]
    fn prop_dimensions_partition_the_season(games in prop::collection::vec(arb_game(), 1..40)) {
        let engine = SplitsEngine::new(SplitsConfig::default());
        let splits = engine.season_splits(&games);
        let total = |rows: &[SplitGroup]| rows.iter().map(|r| r.stats.gp).sum::<u32>();

        let gp = u32::try_from(games.len()).unwrap();
        prop_assert_eq!(total(&splits.overall), gp);
        prop_assert_eq!(total(&splits.location), gp);
        prop_assert_eq!(total(&splits.win_loss), gp);
        prop_assert_eq!(total(&splits.month), gp);
        prop_assert!(total(&splits.days_rest) < gp);
    }

    #[test]
    fn prop_month_rows_follow_calendar_order(games in prop::collection::vec(arb_game(), 1..40)) {
        let forward = aggregate(&games, "Month", month_key);
        let reversed: Vec<GameRecord> = games.iter().rev().cloned().collect();
        let backward = aggregate(&reversed, "Month", month_key);

        let names = |rows: &[SplitGroup]| rows.iter().map(|r| r.group_value.clone()).collect::<Vec<_>>();
        prop_assert_eq!(names(&forward), names(&backward));
    }
}

#[test]
fn test_two_game_partition_reports_two_thirds() {
    let mut games = Vec::new();
    for (date, fgm, fga) in [("2024-01-15", 1.0, 2.0), ("2024-02-10", 1.0, 1.0)] {
        games.push(GameRecord {
            season: "2023-24".to_string(),
            season_type: "Regular Season".to_string(),
            game_id: date.to_string(),
            game_date: date.to_string(),
            matchup: "DEN vs. GSW".to_string(),
            outcome: Outcome::Win,
            stats: BoxScore { fgm, fga, ..Default::default() },
        });
    }

    let overall = aggregate(&games, "Overall", overall_key);
    assert_eq!(overall[0].stats.fg_pct, 0.667);

    games.reverse();
    let months = aggregate(&games, "Month", month_key);
    assert_eq!(months[0].group_value, "January");
    assert_eq!(months[1].group_value, "February");
}

#[test]
fn test_win_pct_rounds_half_thousandth_up() {
    let games: Vec<GameRecord> = (0..16u32)
        .map(|i| GameRecord {
            season: "2023-24".to_string(),
            season_type: "Regular Season".to_string(),
            game_id: i.to_string(),
            game_date: format!("2024-01-{:02}", i + 1),
            matchup: "DEN vs. GSW".to_string(),
            outcome: if i < 5 { Outcome::Win } else { Outcome::Loss },
            stats: BoxScore::default(),
        })
        .collect();

    let stats = &aggregate(&games, "Overall", overall_key)[0].stats;
    assert_eq!((stats.w, stats.l), (5, 11));
    assert_eq!(stats.w_pct, 0.313);
}
