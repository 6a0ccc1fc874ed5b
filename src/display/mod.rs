//! Text presentation of a round.
//!
//! Produces the strings a frontend shows: the status line, the two mark
//! labels, and a plain-text grid. Empty cells show their 1-based number
//! so players know what to type; winning cells are bracketed.

use crate::core::{Cell, CellIndex, MarkAssignment, Participant, RoundState, RoundStatus};

/// Status line for the current round.
#[must_use]
pub fn status_text(state: &RoundState) -> String {
    match state.status {
        RoundStatus::Won { mark, .. } => format!("{mark} wins"),
        RoundStatus::Drawn => "Draw".to_string(),
        RoundStatus::InProgress => match state.turn_owner {
            Participant::Human => "Your turn..".to_string(),
            Participant::Computer => "The computer is thinking..".to_string(),
        },
    }
}

/// Label reminding the player of their mark.
#[must_use]
pub fn player_label(marks: MarkAssignment) -> String {
    format!("Player: {}", marks.human())
}

/// Label showing the computer's mark.
#[must_use]
pub fn computer_label(marks: MarkAssignment) -> String {
    format!("Computer: {}", marks.computer())
}

/// Render the board as a 3×3 text grid.
#[must_use]
pub fn render_board(state: &RoundState) -> String {
    let winning = state.status.winning_line();

    let cell_text = |index: CellIndex| -> String {
        match state.board.get(index) {
            Cell::Empty => format!(" {} ", index.display_number()),
            Cell::Marked(mark) if winning.is_some_and(|line| line.contains(&index.get())) => {
                format!("[{mark}]")
            }
            Cell::Marked(mark) => format!(" {mark} "),
        }
    };

    let rows: Vec<String> = CellIndex::all()
        .collect::<Vec<_>>()
        .chunks(3)
        .map(|row| row.iter().map(|&i| cell_text(i)).collect::<Vec<_>>().join("|"))
        .collect();

    rows.join("\n---+---+---\n")
}
