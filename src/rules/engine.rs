//! Win/draw evaluation over a board.
//!
//! These functions are pure: they read a [`Board`] and never touch turn
//! order. The engine decides what a verdict means for the round.

use crate::core::board::{Board, Cell, Line, WIN_LINES};
use crate::core::mark::Mark;

/// Outcome of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// `mark` holds every cell of `line`.
    Won { mark: Mark, line: Line },
    /// Every cell is filled and no line is complete.
    Drawn,
    /// Play continues.
    Ongoing,
}

impl Verdict {
    #[must_use]
    pub fn is_final(self) -> bool {
        !matches!(self, Verdict::Ongoing)
    }
}

/// First line in table order held entirely by one mark.
#[must_use]
pub fn completed_line(board: &Board) -> Option<(Mark, Line)> {
    WIN_LINES.iter().find_map(|&line| match board.line(line) {
        [Cell::Marked(a), Cell::Marked(b), Cell::Marked(c)] if a == b && b == c => Some((a, line)),
        _ => None,
    })
}

/// Evaluate `board`: a completed line wins, otherwise a full board draws.
#[must_use]
pub fn judge(board: &Board) -> Verdict {
    if let Some((mark, line)) = completed_line(board) {
        Verdict::Won { mark, line }
    } else if board.is_full() {
        Verdict::Drawn
    } else {
        Verdict::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(pattern: &str) -> Board {
        pattern.parse().unwrap()
    }

    #[test]
    fn test_top_row_win() {
        assert_eq!(
            judge(&board("XXXOO____")),
            Verdict::Won { mark: Mark::X, line: [0, 1, 2] }
        );
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        assert_eq!(
            judge(&board("OX_OX__X_")),
            Verdict::Won { mark: Mark::X, line: [1, 4, 7] }
        );
        assert_eq!(
            judge(&board("XXO_O_O__")),
            Verdict::Won { mark: Mark::O, line: [2, 4, 6] }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(judge(&board("XOXXOOOXX")), Verdict::Drawn);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(
            judge(&board("XOXOXOOXX")),
            Verdict::Won { mark: Mark::X, line: [0, 4, 8] }
        );
    }

    #[test]
    fn test_ongoing() {
        assert_eq!(judge(&Board::empty()), Verdict::Ongoing);
        assert_eq!(judge(&board("XO_______")), Verdict::Ongoing);
        assert!(!Verdict::Ongoing.is_final());
        assert!(Verdict::Drawn.is_final());
    }

    #[test]
    fn test_first_line_in_table_order_is_reported() {
        // Both the top row and the left column are complete.
        assert_eq!(completed_line(&board("XXXX__X__")), Some((Mark::X, [0, 1, 2])));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(completed_line(&board("XXO______")), None);
    }
}
