//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = {
    use Position::*;
    [
        // Rows
        [TopLeft, TopCenter, TopRight],
        [MiddleLeft, Center, MiddleRight],
        [BottomLeft, BottomCenter, BottomRight],
        // Columns
        [TopLeft, MiddleLeft, BottomLeft],
        [TopCenter, Center, BottomCenter],
        [TopRight, MiddleRight, BottomRight],
        // Diagonals
        [TopLeft, Center, BottomRight],
        [TopRight, Center, BottomLeft],
    ]
};

/// Returns the player owning a completed line, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = board.get(a).mark()?;
        (board.get(b).mark() == Some(owner) && board.get(c).mark() == Some(owner))
            .then_some(owner)
    })
}
