//! # tictac
//!
//! Tic-tac-toe between a human and a computer that plays uniformly
//! random legal moves.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: a [`Game`] value owns the round. Nothing is
//!    global; frontends hold the game and call into it.
//!
//! 2. **Injected randomness**: mark assignment, first mover and the
//!    computer's cell all come from one seedable [`GameRng`]. A seed
//!    replays a session exactly.
//!
//! 3. **Silent rejection**: illegal moves change nothing and come back
//!    as a [`Rejection`], never as a panic or error.
//!
//! 4. **Round-scoped deferral**: the computer's "thinking" pause is a
//!    [`ThinkTicket`] tied to a round. Tickets outlived by a reset are
//!    refused.
//!
//! ## Modules
//!
//! - `core`: marks, board, round state, RNG, configuration
//! - `rules`: win-line scan and draw detection
//! - `policy`: computer move selection
//! - `engine`: the turn state machine
//! - `schedule`: think tickets and the one-shot timer
//! - `display`: status text, labels and grid rendering
//! - `autoplay`: unattended rounds with a random stand-in for the human

pub mod core;
pub mod rules;
pub mod policy;
pub mod engine;
pub mod schedule;
pub mod display;
pub mod autoplay;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, CellIndex, GameConfig, GameRng, GameRngState, Line, Mark, MarkAssignment,
    MoveRecord, Participant, PolicyKind, RoundId, RoundState, RoundStatus, WIN_LINES,
};

pub use crate::rules::Verdict;

pub use crate::policy::{MovePolicy, RejectionSampling, UniformEmptyCell};

pub use crate::engine::{Game, GameSnapshot, MoveOutcome, Rejection};

pub use crate::schedule::{ThinkTicket, ThinkTimer};

pub use crate::autoplay::Tally;

pub use crate::error::{BoardParseError, CellParseError, ConfigError};
