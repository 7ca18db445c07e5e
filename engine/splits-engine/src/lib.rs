//! Splits Engine
//!
//! Groups a player's game log by season and by split dimension (overall,
//! home/road, wins/losses, calendar month, days of rest) and computes the
//! per-group aggregate row. Shooting percentages are always the combined
//! ratio of summed makes over summed attempts.

pub mod calculator;
pub mod config;
pub mod engine;
pub mod models;
pub mod partition;

#[cfg(test)]
mod tests;

pub use calculator::{aggregate, aggregate_keyed, combined_pct};
pub use config::SplitsConfig;
pub use engine::SplitsEngine;
pub use models::*;
pub use partition::{CalendarMonth, DaysRest, Dimension, Overall, SplitKey};
