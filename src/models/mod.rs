//! Core data models for the tournament tracker.

mod pairing;
mod player;
mod standings;

pub use pairing::*;
pub use player::*;
pub use standings::*;
