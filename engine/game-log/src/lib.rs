//! Game Log
//!
//! Shared record types for a single player's game log: the normalized
//! per-game box score, the conversion from raw source rows (stats API or
//! sports-reference scrape) into that record, and the `{meta, data}` JSON
//! envelope every output file is wrapped in.

pub mod envelope;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod types;

pub use envelope::{read_envelope, write_envelope, Envelope, Meta};
pub use error::GameLogError;
pub use normalize::Normalizer;
pub use types::*;
