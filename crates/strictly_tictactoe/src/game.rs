//! Game engine: board ownership, turn order and move outcomes.

use crate::rules::{check_winner, is_full};
use crate::{Board, Player, Position};
use rand::Rng;
use tracing::{debug, instrument};

/// Result of [`GameState::attempt_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Mark placed; the turn passed to the opponent.
    Continue,
    /// Mark placed and completed a line. The mover stays current.
    Win,
    /// Mark placed and filled the board. The mover stays current.
    Tie,
    /// Square occupied or game already over. Nothing changed.
    IllegalMove,
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up.
    Tied,
}

/// Complete state of one game.
///
/// A new game is a new `GameState`; there is no reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Creates a game with an empty board and a starting player drawn
    /// uniformly from `rng`.
    #[instrument(skip(rng))]
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let starter: Player = rng.r#gen();
        debug!(%starter, "Starting player drawn");
        Self::starting_with(starter)
    }

    /// Creates a game with an empty board and a fixed starting player.
    pub fn starting_with(player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: player,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or after a [`MoveOutcome::Win`] / [`MoveOutcome::Tie`]
    /// the player who made the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game was won or tied.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places the current player's mark at `pos`.
    ///
    /// A full board is reported as [`MoveOutcome::Tie`] before lines are
    /// examined, so a ninth move that also completes a line is a tie.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, pos: Position) -> MoveOutcome {
        if self.is_over() {
            debug!(status = ?self.status, "Move after game end rejected");
            return MoveOutcome::IllegalMove;
        }
        if !self.board.place(pos, self.current_player) {
            debug!(%pos, "Square already occupied");
            return MoveOutcome::IllegalMove;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Tied;
            return MoveOutcome::Tie;
        }

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            return MoveOutcome::Win;
        }

        self.current_player = self.current_player.opponent();
        MoveOutcome::Continue
    }
}
