//! # Swiss Rounds
//!
//! A Swiss-system tournament tracker: player roster, match history, and
//! next-round pairing computation over relational storage.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (players, standings, pairings)
//! - **storage**: SQLite-backed roster and match log operations
//! - **calculate**: Pairing computation over current standings
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
