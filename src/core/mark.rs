//! Marks and participants.
//!
//! ## Mark
//!
//! The symbol written into a cell: `X` or `O`.
//!
//! ## Participant
//!
//! Who is acting: the human at the keyboard or the computer.
//!
//! ## MarkAssignment
//!
//! Which mark each participant plays this round. The two marks are
//! always complementary.

use serde::{Deserialize, Serialize};

/// One of the two symbols on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Both marks, in display order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character form used in board patterns and rendering.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A side in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Participant {
    Human,
    Computer,
}

impl Participant {
    /// The other participant.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Participant::Human => Participant::Computer,
            Participant::Computer => Participant::Human,
        }
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Participant::Human => write!(f, "Human"),
            Participant::Computer => write!(f, "Computer"),
        }
    }
}

/// Marks held by the two participants for one round.
///
/// Only the human's mark is stored; the computer always holds the
/// opponent mark, so the pair can never collide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkAssignment {
    human: Mark,
}

impl MarkAssignment {
    /// Assign `human` to the human and the other mark to the computer.
    #[must_use]
    pub const fn new(human: Mark) -> Self {
        Self { human }
    }

    /// Mark played by the human.
    #[must_use]
    pub const fn human(self) -> Mark {
        self.human
    }

    /// Mark played by the computer.
    #[must_use]
    pub const fn computer(self) -> Mark {
        self.human.opponent()
    }

    /// Mark played by `participant`.
    #[must_use]
    pub const fn mark_of(self, participant: Participant) -> Mark {
        match participant {
            Participant::Human => self.human(),
            Participant::Computer => self.computer(),
        }
    }

    /// Participant who plays `mark`.
    #[must_use]
    pub fn owner_of(self, mark: Mark) -> Participant {
        if mark == self.human {
            Participant::Human
        } else {
            Participant::Computer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(format!("{}", Mark::X), "X");
    }

    #[test]
    fn test_participant_other() {
        assert_eq!(Participant::Human.other(), Participant::Computer);
        assert_eq!(Participant::Computer.other(), Participant::Human);
    }

    #[test]
    fn test_assignment_is_complementary() {
        for human in Mark::ALL {
            let marks = MarkAssignment::new(human);
            assert_eq!(marks.human(), human);
            assert_eq!(marks.computer(), human.opponent());
            assert_ne!(marks.mark_of(Participant::Human), marks.mark_of(Participant::Computer));
        }
    }

    #[test]
    fn test_owner_of() {
        let marks = MarkAssignment::new(Mark::O);
        assert_eq!(marks.owner_of(Mark::O), Participant::Human);
        assert_eq!(marks.owner_of(Mark::X), Participant::Computer);
    }

    #[test]
    fn test_assignment_serialization() {
        let marks = MarkAssignment::new(Mark::X);
        let json = serde_json::to_string(&marks).unwrap();
        let deserialized: MarkAssignment = serde_json::from_str(&json).unwrap();
        assert_eq!(marks, deserialized);
    }
}
