//! Pairing model — a next-round assignment of two players.

use serde::{Deserialize, Serialize};

use super::{PlayerId, StandingsEntry};

/// A single next-round pairing between two players adjacent in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedRound {
    /// The first player's unique id
    pub id1: PlayerId,

    /// The first player's name
    pub name1: String,

    /// The second player's unique id
    pub id2: PlayerId,

    /// The second player's name
    pub name2: String,
}

impl PairedRound {
    /// Pair two standings entries together.
    pub fn from_entries(first: &StandingsEntry, second: &StandingsEntry) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    /// Whether the given player id appears in this pairing.
    pub fn involves(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: PlayerId, name: &str, wins: i64) -> StandingsEntry {
        StandingsEntry {
            id,
            name: name.to_string(),
            wins,
            matches: wins,
        }
    }

    #[test]
    fn test_pairing_from_entries() {
        let pairing = PairedRound::from_entries(&entry(1, "Alice", 2), &entry(2, "Bob", 1));

        assert_eq!(pairing.id1, 1);
        assert_eq!(pairing.name1, "Alice");
        assert_eq!(pairing.id2, 2);
        assert_eq!(pairing.name2, "Bob");
    }

    #[test]
    fn test_pairing_involves() {
        let pairing = PairedRound::from_entries(&entry(1, "Alice", 0), &entry(2, "Bob", 0));

        assert!(pairing.involves(1));
        assert!(pairing.involves(2));
        assert!(!pairing.involves(3));
    }

    #[test]
    fn test_pairing_serialization() {
        let pairing = PairedRound::from_entries(&entry(1, "Alice", 1), &entry(2, "Bob", 1));

        let json = serde_json::to_string(&pairing).unwrap();
        let deserialized: PairedRound = serde_json::from_str(&json).unwrap();
        assert_eq!(pairing, deserialized);
    }
}
