//! Random draws for shot coordinates and action labels

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SynthError;
use crate::zones::{ArcEnvelope, RectEnvelope, ZoneEnvelope};
use crate::UNITS_PER_FOOT;

/// Draw one `(LOC_X, LOC_Y)` inside the envelope's legal box
pub fn sample_location<R: Rng + ?Sized>(
    rng: &mut R,
    envelope: &ZoneEnvelope,
) -> Result<(i32, i32), SynthError> {
    match envelope {
        ZoneEnvelope::Rect(rect) => sample_rect(rng, rect),
        ZoneEnvelope::Arc(arc) => sample_arc(rng, arc),
    }
}

fn sample_rect<R: Rng + ?Sized>(rng: &mut R, rect: &RectEnvelope) -> Result<(i32, i32), SynthError> {
    let noise_x = Normal::new(0.0, rect.sigma_x)?;
    let noise_y = Normal::new(0.0, rect.sigma_y)?;

    let base_x = rng.gen_range(rect.base_x.min..=rect.base_x.max);
    let base_y = rng.gen_range(rect.base_y.min..=rect.base_y.max);

    // `as` truncates toward zero
    let x = (f64::from(base_x) + noise_x.sample(rng)) as i32;
    let y = (f64::from(base_y) + noise_y.sample(rng)) as i32;

    Ok((rect.clamp_x.clamp(x), rect.clamp_y.clamp(y)))
}

fn sample_arc<R: Rng + ?Sized>(rng: &mut R, arc: &ArcEnvelope) -> Result<(i32, i32), SynthError> {
    let noise = Normal::new(0.0, arc.radius_sigma)?;

    let angle = rng.gen_range(arc.angle_margin..=PI - arc.angle_margin);
    let radius = (arc.radius_mean + noise.sample(rng)).clamp(arc.radius_min, arc.radius_max);

    let base_x = radius * angle.cos();
    let mirrored = if rng.gen_bool(0.5) { base_x } else { -base_x };
    let x = mirrored as i32;
    let y = (radius * angle.sin()).abs() as i32;

    Ok((arc.clamp_x.clamp(x), arc.clamp_y.clamp(y)))
}

/// `SHOT_DISTANCE` in whole feet. Halves round to even.
pub fn shot_distance(loc_x: i32, loc_y: i32) -> i32 {
    let (x, y) = (f64::from(loc_x), f64::from(loc_y));
    ((x * x + y * y).sqrt() / UNITS_PER_FOOT).round_ties_even() as i32
}

/// Cumulative-weight inversion over `(label, weight)` pairs
pub fn weighted_choice<'a, R: Rng + ?Sized>(
    rng: &mut R,
    options: &[(&'a str, u32)],
) -> Option<&'a str> {
    let total: u64 = options.iter().map(|&(_, w)| u64::from(w)).sum();
    if total == 0 {
        return None;
    }

    let mut ticket = rng.gen_range(0..total);
    for &(label, weight) in options {
        let weight = u64::from(weight);
        if ticket < weight {
            return Some(label);
        }
        ticket -= weight;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ShotZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_locations_respect_clamp_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for zone in ShotZone::ALL {
            let envelope = zone.envelope();
            let (bx, by) = envelope.bounds();
            for _ in 0..500 {
                let (x, y) = sample_location(&mut rng, &envelope).unwrap();
                assert!(bx.contains(x), "{}: x={} out of range", zone.label(), x);
                assert!(by.contains(y), "{}: y={} out of range", zone.label(), y);
            }
        }
    }

    #[test]
    fn test_arc_shots_mirror_both_sides() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let envelope = ShotZone::AboveTheBreak3.envelope();
        let xs: Vec<i32> = (0..200)
            .map(|_| sample_location(&mut rng, &envelope).unwrap().0)
            .collect();
        assert!(xs.iter().any(|&x| x < 0));
        assert!(xs.iter().any(|&x| x > 0));
    }

    #[test]
    fn test_shot_distance() {
        assert_eq!(shot_distance(0, 0), 0);
        assert_eq!(shot_distance(30, 40), 5);
        assert_eq!(shot_distance(-237, 0), 24);
        assert_eq!(shot_distance(0, 15), 2);
        assert_eq!(shot_distance(0, 25), 2);
        assert_eq!(shot_distance(220, 90), 24);
    }

    #[test]
    fn test_weighted_choice_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let options = [("never", 0), ("always", 5), ("also never", 0)];
        for _ in 0..100 {
            assert_eq!(weighted_choice(&mut rng, &options), Some("always"));
        }
    }

    #[test]
    fn test_weighted_choice_empty_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert_eq!(weighted_choice(&mut rng, &[]), None);
        assert_eq!(weighted_choice(&mut rng, &[("a", 0)]), None);
    }

    #[test]
    fn test_weighted_choice_follows_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let options = [("heavy", 90), ("light", 10)];
        let heavy = (0..2000)
            .filter(|_| weighted_choice(&mut rng, &options) == Some("heavy"))
            .count();
        assert!((1650..=1950).contains(&heavy), "heavy drawn {} times", heavy);
    }
}
