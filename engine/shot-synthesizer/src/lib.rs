//! Shot Synthesizer
//!
//! Fabricates geometrically plausible shot charts for demos and test
//! fixtures. Each of six court zones has its own coordinate envelope and
//! action-type mix; callers supply per-(season, zone) shot counts and make
//! rates plus a pool of candidate games. Every random draw comes from an
//! explicitly passed `Rng`, so a seeded source reproduces a run exactly.

pub mod config;
pub mod error;
pub mod models;
pub mod plan;
pub mod sampling;
pub mod schedule;
pub mod synthesizer;
pub mod zones;


pub use config::SynthConfig;
pub use error::SynthError;
pub use models::*;
pub use plan::{default_plans, run_plans, zone_summary, SeasonPlan, ZoneTarget};
pub use synthesizer::{synthesize, ShotSynthesizer};
pub use zones::{ShotArea, ShotType, ShotZone, ZoneEnvelope};

/// Court units per foot
pub const UNITS_PER_FOOT: f64 = 10.0;
