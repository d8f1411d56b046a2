//! Player model — roster identity records.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Type alias for storage-assigned player ids.
pub type PlayerId = i64;

/// A registered tournament player.
///
/// The id is assigned by the database at registration time and is stable for
/// the player's lifetime. Names are free text and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Player {
    /// Unique identifier (assigned by the database)
    pub id: PlayerId,

    /// Full name as registered
    pub name: String,
}
