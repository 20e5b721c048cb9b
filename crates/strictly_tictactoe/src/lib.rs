//! Pure tic-tac-toe game logic.
//!
//! [`GameState`] owns a [`Board`] and the turn order and exposes one
//! mutating operation, [`GameState::attempt_move`], which reports a
//! [`MoveOutcome`].
//!
//! ```
//! use strictly_tictactoe::{GameState, MoveOutcome, Player, Position};
//!
//! let mut game = GameState::starting_with(Player::Cross);
//! assert_eq!(game.attempt_move(Position::Center), MoveOutcome::Continue);
//! assert_eq!(game.attempt_move(Position::Center), MoveOutcome::IllegalMove);
//! assert_eq!(game.current_player(), Player::Circle);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, GameStatus, MoveOutcome};
pub use position::{NotationError, Position};
pub use types::{Board, Player, Square};
