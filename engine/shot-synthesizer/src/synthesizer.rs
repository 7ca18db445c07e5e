//! Per-zone shot synthesis

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::SynthError;
use crate::models::{CandidateGame, ShotEvent};
use crate::sampling::{sample_location, shot_distance, weighted_choice};
use crate::zones::ShotZone;

/// Generate `count` shots for one zone of one season.
///
/// Inputs are checked before the first draw, so a rejected call leaves the
/// random source untouched. Each shot picks its game uniformly with
/// replacement from `games`.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    zone: ShotZone,
    count: i64,
    make_probability: f64,
    season: &str,
    games: &[CandidateGame],
) -> Result<Vec<ShotEvent>, SynthError> {
    if count < 0 {
        return Err(SynthError::NegativeCount(count));
    }
    if !(0.0..=1.0).contains(&make_probability) {
        return Err(SynthError::InvalidProbability(make_probability));
    }
    if games.is_empty() {
        return Err(SynthError::EmptyGamePool);
    }
    let actions = zone.actions();
    if actions.iter().all(|&(_, w)| w == 0) {
        return Err(SynthError::EmptyActionTable { zone: zone.label() });
    }

    let envelope = zone.envelope();
    let capacity = usize::try_from(count).map_err(|_| SynthError::TooManyShots(count))?;
    let mut shots = Vec::new();
    shots
        .try_reserve_exact(capacity)
        .map_err(|_| SynthError::TooManyShots(count))?;

    for _ in 0..count {
        let game = games.choose(rng).ok_or(SynthError::EmptyGamePool)?;
        let (loc_x, loc_y) = sample_location(rng, &envelope)?;
        let made = rng.gen_bool(make_probability);
        let action = weighted_choice(rng, actions)
            .ok_or(SynthError::EmptyActionTable { zone: zone.label() })?;

        shots.push(ShotEvent {
            season: season.to_string(),
            game_id: game.game_id.clone(),
            game_date: game.date,
            loc_x,
            loc_y,
            shot_made_flag: u8::from(made),
            shot_type: zone.shot_type(),
            shot_zone_basic: zone,
            shot_zone_area: zone.area(loc_x),
            shot_distance: shot_distance(loc_x, loc_y),
            action_type: action.to_string(),
            matchup: game.matchup.clone(),
        });
    }

    debug!(
        "Synthesized {} {} shots for {}",
        shots.len(),
        zone.label(),
        season
    );
    Ok(shots)
}

/// Owns a seeded `ChaCha8Rng` so a whole run replays from one seed
pub struct ShotSynthesizer {
    rng: ChaCha8Rng,
}

impl ShotSynthesizer {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    pub fn synthesize(
        &mut self,
        zone: ShotZone,
        count: i64,
        make_probability: f64,
        season: &str,
        games: &[CandidateGame],
    ) -> Result<Vec<ShotEvent>, SynthError> {
        synthesize(&mut self.rng, zone, count, make_probability, season, games)
    }
}
