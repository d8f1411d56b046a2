//! Pairing computation engine.
//!
//! Derives the next round's Swiss pairings from a standings list already
//! sorted by wins: walk the list two entries at a time and pair each entry
//! with its neighbor, so players meet opponents with equal or nearly-equal
//! win records.

use thiserror::Error;

use crate::models::{PairedRound, StandingsEntry};
use crate::storage::StorageError;

/// Errors from the pairing computation.
#[derive(Debug, Error)]
pub enum PairingError {
    #[error("cannot pair an uneven number of players ({player_count})")]
    UnevenPlayerCount { player_count: usize },

    #[error("failed to read standings: {0}")]
    Standings(#[from] StorageError),
}

/// Pair adjacent entries of a sorted standings list.
///
/// Entry `2k` is paired with entry `2k+1`, so every player appears in exactly
/// one pairing. An empty list yields an empty result; an odd-length list is
/// rejected rather than silently dropping the trailing player.
pub fn pair_adjacent(standings: &[StandingsEntry]) -> Result<Vec<PairedRound>, PairingError> {
    if standings.len() % 2 != 0 {
        return Err(PairingError::UnevenPlayerCount {
            player_count: standings.len(),
        });
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| PairedRound::from_entries(&pair[0], &pair[1]))
        .collect())
}
