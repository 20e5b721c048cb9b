//! Tests for the random starting player.

use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_chacha::ChaCha8Rng;
use strictly_tictactoe::{GameState, Player, Position, Square};

#[test]
fn test_new_game_is_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let game = GameState::new(&mut rng);
    assert!(Position::ALL.iter().all(|&pos| game.board().get(pos) == Square::Empty));
    assert!(!game.is_over());
}

#[test]
fn test_starter_follows_injected_rng() {
    assert_eq!(GameState::new(&mut StepRng::new(0, 0)).current_player(), Player::Cross);
    assert_eq!(
        GameState::new(&mut StepRng::new(u64::MAX, 0)).current_player(),
        Player::Circle
    );
}

#[test]
fn test_starter_is_roughly_even() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let trials = 10_000;
    let crosses = (0..trials)
        .filter(|_| GameState::new(&mut rng).current_player() == Player::Cross)
        .count();

    assert!((4_500..=5_500).contains(&crosses), "cross started {crosses} of {trials}");
}
