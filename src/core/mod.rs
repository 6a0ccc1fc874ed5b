//! Core types: marks, board, round state, moves, RNG, configuration.
//!
//! These are plain values with no behaviour beyond their own invariants.
//! Rules live in `rules`, turn handling in `engine`.

pub mod mark;
pub mod board;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use mark::{Mark, MarkAssignment, Participant};
pub use board::{Board, Cell, CellIndex, Line, CELL_COUNT, WIN_LINES};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, PolicyKind, DEFAULT_THINK_DELAY, MAX_THINK_DELAY};
pub use action::MoveRecord;
pub use state::{RoundId, RoundState, RoundStatus};
