//! Error types for shot synthesis

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    #[error("Shot count cannot be negative: {0}")]
    NegativeCount(i64),

    #[error("Make probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Cannot allocate room for {0} shots")]
    TooManyShots(i64),

    #[error("Candidate game pool is empty")]
    EmptyGamePool,

    #[error("Action table for {zone} has no positive weights")]
    EmptyActionTable { zone: &'static str },

    #[error("Invalid noise distribution: {0}")]
    Distribution(String),

    #[error("Unrecognized season label '{0}' (expected e.g. 2024-25)")]
    InvalidSeason(String),
}

impl From<rand_distr::NormalError> for SynthError {
    fn from(e: rand_distr::NormalError) -> Self {
        SynthError::Distribution(e.to_string())
    }
}
