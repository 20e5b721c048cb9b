//! Tests for move outcomes and turn order.

use strictly_tictactoe::rules::LINES;
use strictly_tictactoe::{GameState, GameStatus, MoveOutcome, Player, Position, Square};

fn at(row: usize, column: usize) -> Position {
    Position::from_row_column(row, column).expect("coordinate on board")
}

#[test]
fn test_second_move_on_same_square_is_illegal() {
    for pos in Position::ALL {
        let mut game = GameState::starting_with(Player::Cross);
        assert_eq!(game.attempt_move(pos), MoveOutcome::Continue);

        let before = game.clone();
        assert_eq!(game.attempt_move(pos), MoveOutcome::IllegalMove);
        assert_eq!(game, before, "illegal move at {pos} changed state");
    }
}

#[test]
fn test_turn_alternates_on_continue() {
    let mut game = GameState::starting_with(Player::Circle);
    game.attempt_move(at(0, 0));
    assert_eq!(game.current_player(), Player::Cross);
    game.attempt_move(at(0, 1));
    assert_eq!(game.current_player(), Player::Circle);
    assert_eq!(game.board().get(at(0, 0)), Square::Occupied(Player::Circle));
    assert_eq!(game.board().get(at(0, 1)), Square::Occupied(Player::Cross));
}

#[test]
fn test_main_diagonal_wins_on_fifth_move() {
    let mut game = GameState::starting_with(Player::Cross);
    let moves = [at(0, 0), at(0, 1), at(1, 1), at(0, 2)];
    for pos in moves {
        assert_eq!(game.attempt_move(pos), MoveOutcome::Continue);
    }

    assert_eq!(game.attempt_move(at(2, 2)), MoveOutcome::Win);
    assert_eq!(game.current_player(), Player::Cross);
    assert_eq!(game.status(), GameStatus::Won(Player::Cross));
}

#[test]
fn test_any_line_wins_for_its_owner() {
    for line in LINES {
        // The opponent only gets two marks, off the line.
        let fillers = Position::ALL
            .into_iter()
            .filter(|pos| !line.contains(pos))
            .collect::<Vec<_>>();

        let mut game = GameState::starting_with(Player::Circle);
        for (i, pos) in line.into_iter().enumerate() {
            let outcome = game.attempt_move(pos);
            if i < 2 {
                assert_eq!(outcome, MoveOutcome::Continue, "line {line:?}");
                assert_eq!(game.attempt_move(fillers[i]), MoveOutcome::Continue);
            } else {
                assert_eq!(outcome, MoveOutcome::Win, "line {line:?}");
                assert_eq!(game.current_player(), Player::Circle);
            }
        }
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    // Χ ● Χ
    // Χ ● ●
    // ● Χ Χ
    let moves = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 1),
        at(1, 0),
        at(1, 2),
        at(2, 1),
        at(2, 0),
    ];
    let mut game = GameState::starting_with(Player::Cross);
    for pos in moves {
        assert_eq!(game.attempt_move(pos), MoveOutcome::Continue);
    }

    assert_eq!(game.attempt_move(at(2, 2)), MoveOutcome::Tie);
    assert_eq!(game.status(), GameStatus::Tied);
    assert_eq!(game.current_player(), Player::Cross);
}

#[test]
fn test_final_move_completing_line_reports_tie() {
    // Χ Χ Χ   <- the ninth move at B1 both fills the board and wins
    // ● ● Χ
    // Χ ● ●
    let moves = [
        at(0, 0),
        at(1, 0),
        at(0, 2),
        at(1, 1),
        at(1, 2),
        at(2, 1),
        at(2, 0),
        at(2, 2),
    ];
    let mut game = GameState::starting_with(Player::Cross);
    for pos in moves {
        assert_eq!(game.attempt_move(pos), MoveOutcome::Continue);
    }

    assert_eq!(game.attempt_move(at(0, 1)), MoveOutcome::Tie);
    assert_eq!(game.status(), GameStatus::Tied);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = GameState::starting_with(Player::Cross);
    for pos in [at(0, 0), at(1, 0), at(0, 1), at(1, 1), at(0, 2)] {
        game.attempt_move(pos);
    }
    assert!(game.is_over());

    let before = game.clone();
    assert_eq!(game.attempt_move(at(2, 2)), MoveOutcome::IllegalMove);
    assert_eq!(game, before);
}
