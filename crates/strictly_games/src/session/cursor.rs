//! Grid cursor.

use strictly_tictactoe::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// Selected cell. Always on the board; stepping off an edge does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    position: Position,
}

impl Cursor {
    /// Cursor at the origin (top-left).
    pub fn new() -> Self {
        Self {
            position: Position::TopLeft,
        }
    }

    /// Selected position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Zero-based row.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Zero-based column.
    pub fn column(&self) -> usize {
        self.position.column()
    }

    /// Moves one cell, clamping each axis to the board.
    pub fn step(&mut self, direction: Direction) {
        let (row, column) = (self.row(), self.column());
        let (row, column) = match direction {
            Direction::Up => (row.saturating_sub(1), column),
            Direction::Down => ((row + 1).min(2), column),
            Direction::Left => (row, column.saturating_sub(1)),
            Direction::Right => (row, (column + 1).min(2)),
        };
        if let Some(position) = Position::from_row_column(row, column) {
            self.position = position;
        }
    }

    /// Jumps straight to a position.
    pub fn jump(&mut self, position: Position) {
        self.position = position;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
