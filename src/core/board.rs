//! The 3×3 board.
//!
//! ## CellIndex
//!
//! Validated index into the board, 0..=8 in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! ## Board
//!
//! Nine cells, each empty or holding a [`Mark`]. Patterns such as
//! `"XXXOO____"` parse into a board, which keeps tests readable:
//!
//! ```
//! use tictac::core::{Board, Cell, CellIndex, Mark};
//!
//! let board: Board = "XXXOO____".parse().unwrap();
//! assert_eq!(board.get(CellIndex::new(0).unwrap()), Cell::Marked(Mark::X));
//! assert_eq!(board.filled_count(), 5);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::mark::Mark;
use crate::error::{BoardParseError, CellParseError};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A line of three cell indices.
pub type Line = [usize; 3];

/// All lines that win the round, scanned in this order:
/// rows, then columns, then diagonals.
pub const WIN_LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Validated cell index (0..=8).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex(u8);

impl CellIndex {
    /// Create a cell index, or `None` if `index` is off the board.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(Self(index as u8))
    }

    /// Raw 0-based index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0 as usize
    }

    /// 1-based number shown to players.
    #[must_use]
    pub const fn display_number(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over all nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }

    /// Parse a 1-based cell number as typed by a player (`"1"`..=`"9"`).
    pub fn from_display_number(input: &str) -> Result<Self, CellParseError> {
        let number = parse_number(input)?;
        number
            .checked_sub(1)
            .and_then(Self::new)
            .ok_or(CellParseError::OutOfRange(number))
    }
}

/// Parses a 0-based index (`"0"`..=`"8"`).
impl FromStr for CellIndex {
    type Err = CellParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let index = parse_number(input)?;
        Self::new(index).ok_or(CellParseError::OutOfRange(index))
    }
}

fn parse_number(input: &str) -> Result<usize, CellParseError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| CellParseError::NotANumber(trimmed.to_string()))
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    const fn as_char(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Marked(mark) => mark.as_char(),
        }
    }
}

/// Nine cells in row-major order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get()]
    }

    /// Write a mark into a cell.
    ///
    /// Callers check legality first; this overwrites unconditionally.
    pub(crate) fn set(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index.get()] = Cell::Marked(mark);
    }

    #[must_use]
    pub fn is_empty_at(&self, index: CellIndex) -> bool {
        self.get(index).is_empty()
    }

    /// Empty cells in ascending index order.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[CellIndex; CELL_COUNT]> {
        CellIndex::all().filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Number of cells holding a mark.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Read-only view of all cells.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// The three cells of `line`.
    #[must_use]
    pub fn line(&self, line: Line) -> [Cell; 3] {
        line.map(|i| self.cells[i])
    }
}

/// Parses nine characters of `X`, `O`, `_` or `.`; whitespace is ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(chars.len()));
        }

        let mut board = Board::empty();
        for (slot, ch) in board.cells.iter_mut().zip(chars) {
            *slot = match ch.to_ascii_uppercase() {
                'X' => Cell::Marked(Mark::X),
                'O' => Cell::Marked(Mark::O),
                '_' | '.' => Cell::Empty,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }
        Ok(())
    }
}
