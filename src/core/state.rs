//! Round state.
//!
//! ## RoundStatus
//!
//! `InProgress` → `Won` | `Drawn`. Terminal statuses only change through
//! a reset, which starts a new round.
//!
//! ## RoundState
//!
//! Everything observable about the current round: board, marks, whose
//! turn it is, status, and the moves played so far. `RoundId` increases
//! on every reset so deferred work can tell which round it belongs to.

use serde::{Deserialize, Serialize};

use super::action::MoveRecord;
use super::board::{Board, Line};
use super::mark::{Mark, MarkAssignment, Participant};

/// Identity of a round. Increases by one on every reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl RoundId {
    /// The id of the round after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Status of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    /// `mark` completed `line`.
    Won { mark: Mark, line: Line },
    /// Board full with no completed line.
    Drawn,
}

impl RoundStatus {
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, RoundStatus::InProgress)
    }

    /// Won or drawn.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    /// Winning mark, if the round was won.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            RoundStatus::Won { mark, .. } => Some(mark),
            _ => None,
        }
    }

    /// Winning line, if the round was won.
    #[must_use]
    pub const fn winning_line(self) -> Option<Line> {
        match self {
            RoundStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}

/// Observable state of one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Which round this is.
    pub round: RoundId,

    pub board: Board,

    /// Marks held by each participant.
    pub marks: MarkAssignment,

    /// Participant allowed to move next.
    pub turn_owner: Participant,

    pub status: RoundStatus,

    /// Accepted moves, oldest first.
    pub history: Vec<MoveRecord>,
}

impl RoundState {
    /// A fresh round: empty board, in progress, no history.
    #[must_use]
    pub fn new(round: RoundId, marks: MarkAssignment, turn_owner: Participant) -> Self {
        Self {
            round,
            board: Board::empty(),
            marks,
            turn_owner,
            status: RoundStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Replace the board (setting up positions).
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the status (setting up finished rounds).
    #[must_use]
    pub fn with_status(mut self, status: RoundStatus) -> Self {
        self.status = status;
        self
    }

    /// Participant holding `mark` this round.
    #[must_use]
    pub fn owner_of(&self, mark: Mark) -> Participant {
        self.marks.owner_of(mark)
    }
}
