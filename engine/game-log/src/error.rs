//! Error types for game log normalization

use thiserror::Error;

/// Errors raised while turning a raw source row into a [`crate::GameRecord`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameLogError {
    #[error("Game row is not a JSON object")]
    NotAnObject,

    #[error("Missing required field {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for {field}: '{value}'")]
    InvalidField { field: &'static str, value: String },

    #[error("{field}: {makes} makes exceed {attempts} attempts")]
    MakesExceedAttempts { field: &'static str, makes: f64, attempts: f64 },

    #[error("Minutes played cannot be negative: {0}")]
    NegativeMinutes(f64),
}
