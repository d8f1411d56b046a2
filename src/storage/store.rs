//! Tournament store — the public operation surface over the pooled database.

use tracing::{debug, info};

use super::{DbPool, StorageError};
use crate::calculate::{pair_adjacent, PairingError};
use crate::models::{PairedRound, Player, PlayerId, StandingsEntry};

/// Handle for all roster, match log, and standings operations.
///
/// Cloning is cheap; every clone shares the same underlying pool. The store
/// holds no mutable state of its own, so each call is independent beyond what
/// the database persists.
#[derive(Debug, Clone)]
pub struct TournamentStore {
    pool: DbPool,
}

impl TournamentStore {
    /// Create a store over an already-migrated pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Register a player under the given name.
    ///
    /// The database assigns the id; names need not be unique. Returns the
    /// stored row.
    pub async fn register_player(&self, name: &str) -> Result<Player, StorageError> {
        let player: Player =
            sqlx::query_as("INSERT INTO player (name) VALUES (?) RETURNING id, name")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        debug!(id = player.id, name = %player.name, "registered player");
        Ok(player)
    }

    /// Number of players currently registered.
    pub async fn count_players(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT count(*) FROM player")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Remove all player records unconditionally.
    ///
    /// Match records are not touched; any that reference the deleted players
    /// keep their now-dangling ids.
    pub async fn delete_players(&self) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM player").execute(&self.pool).await?;

        info!(rows = result.rows_affected(), "cleared player roster");
        Ok(())
    }

    /// Record the outcome of a single match between two players.
    ///
    /// Neither id is checked against the roster; a result referencing an
    /// unregistered player is accepted as-is.
    pub async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO \"match\" (winner, loser) VALUES (?, ?)")
            .bind(winner_id)
            .bind(loser_id)
            .execute(&self.pool)
            .await?;

        debug!(winner = winner_id, loser = loser_id, "reported match");
        Ok(())
    }

    /// Remove all match records unconditionally. Idempotent.
    pub async fn delete_matches(&self) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM \"match\"")
            .execute(&self.pool)
            .await?;

        info!(rows = result.rows_affected(), "cleared match log");
        Ok(())
    }

    /// Current standings: every registered player with their win record,
    /// sorted by wins descending, then id ascending for a stable order among
    /// tied players.
    ///
    /// Recomputed from the match log on every call; players with no matches
    /// appear with `wins = 0, matches = 0`.
    pub async fn player_standings(&self) -> Result<Vec<StandingsEntry>, StorageError> {
        let standings: Vec<StandingsEntry> = sqlx::query_as(
            "SELECT p.id, p.name, w.wins, m.matches \
             FROM player AS p \
             JOIN win_count AS w ON p.id = w.id \
             JOIN matches_count AS m ON p.id = m.id \
             ORDER BY w.wins DESC, p.id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(standings)
    }

    /// Next-round Swiss pairings: reads the standings once and pairs players
    /// adjacent in the ranking.
    ///
    /// Fails with [`PairingError::UnevenPlayerCount`] when the number of
    /// registered players is odd.
    pub async fn swiss_pairings(&self) -> Result<Vec<PairedRound>, PairingError> {
        let standings = self.player_standings().await?;
        pair_adjacent(&standings)
    }
}
