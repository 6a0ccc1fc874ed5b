//! Game rules.
//!
//! Scans the win-line table and decides whether a board is won,
//! drawn, or still open. Turn order is the engine's concern.

pub mod engine;

pub use engine::{completed_line, judge, Verdict};
