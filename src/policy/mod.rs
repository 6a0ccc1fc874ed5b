//! Computer move selection.
//!
//! Policies are trait-based so frontends and tests can swap them:
//! - `UniformEmptyCell`: pick uniformly from the list of empty cells
//! - `RejectionSampling`: draw any cell, retry until it is empty
//!
//! Both are uniform over the empty cells. The first always finishes in
//! one draw; the second needs a geometric number of draws and is kept
//! for parity with the classic browser version of the game.

use crate::core::{Board, CellIndex, GameRng, PolicyKind, CELL_COUNT};

/// Chooses the cell the computer plays.
pub trait MovePolicy: Send + Sync {
    /// Pick an empty cell on `board`.
    ///
    /// Returns `None` only if the board is full.
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<CellIndex>;
}

/// Uniform choice from the empty cells.
#[derive(Clone, Debug, Default)]
pub struct UniformEmptyCell;

impl MovePolicy for UniformEmptyCell {
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<CellIndex> {
        let empty = board.empty_cells();
        rng.choose(&empty).copied()
    }
}

/// Draw cells uniformly from the whole board until an empty one comes up.
#[derive(Clone, Debug, Default)]
pub struct RejectionSampling;

impl MovePolicy for RejectionSampling {
    fn select(&self, board: &Board, rng: &mut GameRng) -> Option<CellIndex> {
        if board.is_full() {
            return None;
        }

        loop {
            let cell = CellIndex::new(rng.gen_range_usize(0..CELL_COUNT))?;
            if board.is_empty_at(cell) {
                return Some(cell);
            }
        }
    }
}

/// Build the policy named by `kind`.
#[must_use]
pub fn build(kind: PolicyKind) -> Box<dyn MovePolicy> {
    match kind {
        PolicyKind::EmptyCells => Box::new(UniformEmptyCell),
        PolicyKind::RejectionSampling => Box::new(RejectionSampling),
    }
}
