//! Turn handling for one human and one computer.
//!
//! `Game` owns the round state and applies the rules:
//! - `attempt_move`: validate and write a mark, then evaluate
//! - `evaluate_round`: win, draw, or pass the turn
//! - `computer_select`: redeem a think ticket with a policy-chosen cell
//! - `reset`: start a new round with fresh marks and first mover
//! - `snapshot` / `restore`: capture round and RNG position in memory

mod game;

pub use game::{Game, GameSnapshot, MoveOutcome, Rejection};
