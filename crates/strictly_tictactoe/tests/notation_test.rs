//! Tests for the typed coordinate notation.

use strictly_tictactoe::{NotationError, Position};

#[test]
fn test_parses_both_orders_and_cases() {
    for input in ["B2", "b2", "2B", "2b", " b2 "] {
        assert_eq!(input.parse::<Position>(), Ok(Position::Center), "{input:?}");
    }
    assert_eq!("A1".parse::<Position>(), Ok(Position::TopLeft));
    assert_eq!("3c".parse::<Position>(), Ok(Position::BottomRight));
    assert_eq!("C1".parse::<Position>(), Ok(Position::TopRight));
}

#[test]
fn test_rejects_malformed_input() {
    for input in ["", "A", "A4", "D1", "AA", "11", "A12", "x2"] {
        assert_eq!(
            input.parse::<Position>(),
            Err(NotationError::Malformed(input.to_string())),
            "{input:?}"
        );
    }
}

#[test]
fn test_display_parses_back() {
    for pos in Position::ALL {
        assert_eq!(pos.to_string().parse::<Position>(), Ok(pos));
    }
}
