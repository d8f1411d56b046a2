//! Standings model — per-player win records derived from the match log.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::PlayerId;

/// One row of the current standings: a player joined with their win record.
///
/// Derived on every read from the match log, never persisted. A player with
/// no reported matches appears with `wins = 0, matches = 0`, and
/// `matches >= wins` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StandingsEntry {
    /// The player's unique id (assigned by the database)
    pub id: PlayerId,

    /// The player's full name (as registered)
    pub name: String,

    /// Number of matches the player has won
    pub wins: i64,

    /// Number of matches the player has played, in either role
    pub matches: i64,
}
