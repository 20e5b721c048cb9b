//! Core domain types for tic-tac-toe.

use super::position::Position;
use rand::Rng;
use rand::distributions::{Distribution, Standard};

/// Player in the game.
///
/// Displays as its lowercase shape name (`cross`, `circle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// Cross, drawn as a Greek capital chi.
    Cross,
    /// Circle, drawn as a filled dot.
    Circle,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Glyph placed on the board for this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'Χ',
            Player::Circle => '●',
        }
    }
}

/// Uniform coin flip between the two players, so `rng.r#gen::<Player>()`
/// picks who starts.
impl Distribution<Player> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Player {
        if rng.gen_bool(0.5) {
            Player::Cross
        } else {
            Player::Circle
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Glyph for this square; blank when empty.
    pub fn symbol(self) -> char {
        self.mark().map_or(' ', Player::symbol)
    }
}

/// Fixed 3x3 tic-tac-toe board.
///
/// Squares only move from [`Square::Empty`] to [`Square::Occupied`]; the
/// board offers no way to clear a mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Squares in row-major order.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the three squares of a row (0-2).
    pub fn row(&self, row: usize) -> &[Square] {
        let start = row.min(2) * 3;
        &self.squares[start..start + 3]
    }

    /// Marks an empty square. Occupied squares are left untouched and
    /// `false` is returned.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            return false;
        }
        *square = Square::Occupied(player);
        true
    }
}
