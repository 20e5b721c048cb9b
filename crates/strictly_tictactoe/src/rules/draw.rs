//! Full-board detection for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Checks if no empty squares remain.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}
