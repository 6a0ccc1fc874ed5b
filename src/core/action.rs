//! Recorded moves.
//!
//! Every accepted move is appended to the round's history as a
//! [`MoveRecord`]. The history is cleared when the round resets.

use serde::{Deserialize, Serialize};

use super::board::CellIndex;
use super::mark::{Mark, Participant};

/// An accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub actor: Participant,

    /// Mark written.
    pub mark: Mark,

    /// Cell written to.
    pub cell: CellIndex,

    /// Position of this move within the round (0-based).
    pub sequence: u8,
}

impl MoveRecord {
    #[must_use]
    pub fn new(actor: Participant, mark: Mark, cell: CellIndex, sequence: u8) -> Self {
        Self {
            actor,
            mark,
            cell,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Participant::Computer, Mark::O, CellIndex::new(4).unwrap(), 1);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
