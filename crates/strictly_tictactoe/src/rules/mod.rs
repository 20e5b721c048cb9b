//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); the engine in
//! [`GameState`](crate::GameState) decides the order they are consulted in.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
