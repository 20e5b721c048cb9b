//! Board coordinates and the `A2` move notation.

use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Rows are numbered `1`-`3` top to bottom and columns lettered `A`-`C` left
/// to right, so [`Position::TopLeft`] is `A1` and [`Position::BottomRight`]
/// is `C3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Top-left (A1)
    TopLeft,
    /// Top-center (B1)
    TopCenter,
    /// Top-right (C1)
    TopRight,
    /// Middle-left (A2)
    MiddleLeft,
    /// Center (B2)
    Center,
    /// Middle-right (C2)
    MiddleRight,
    /// Bottom-left (A3)
    BottomLeft,
    /// Bottom-center (B3)
    BottomCenter,
    /// Bottom-right (C3)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column, `None` when either
    /// is outside `0..=2`.
    pub fn from_row_column(row: usize, column: usize) -> Option<Self> {
        if row > 2 || column > 2 {
            return None;
        }
        Self::from_index(row * 3 + column)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }
}

/// Prints the canonical notation, e.g. `B2`.
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let column = char::from(b'A' + self.column() as u8);
        write!(f, "{}{}", column, self.row() + 1)
    }
}

/// Error parsing a typed coordinate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NotationError {
    /// Input was not exactly one column letter and one row digit.
    #[display("Expected a coordinate like A2, got {:?}", _0)]
    Malformed(#[error(not(source))] String),
}

/// Column letter `A`-`C` (any case) to zero-based column.
fn column_of(c: char) -> Option<usize> {
    match c.to_ascii_uppercase() {
        'A' => Some(0),
        'B' => Some(1),
        'C' => Some(2),
        _ => None,
    }
}

/// Row digit `1`-`3` to zero-based row.
fn row_of(c: char) -> Option<usize> {
    match c {
        '1' => Some(0),
        '2' => Some(1),
        '3' => Some(2),
        _ => None,
    }
}

/// Parses `A2`, `a2`, `2A` or `2a`. Surrounding whitespace is ignored.
impl FromStr for Position {
    type Err = NotationError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::Malformed(s.to_string());
        let mut chars = s.trim().chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(first), Some(second), None) => (first, second),
            _ => return Err(malformed()),
        };

        let (row, column) = match (column_of(first), row_of(second)) {
            (Some(column), Some(row)) => (row, column),
            _ => match (row_of(first), column_of(second)) {
                (Some(row), Some(column)) => (row, column),
                _ => return Err(malformed()),
            },
        };

        Self::from_row_column(row, column).ok_or_else(malformed)
    }
}
