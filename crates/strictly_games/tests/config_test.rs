//! Tests for loading and merging the game configuration.

use rand::Rng;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use strictly_games::{ConfigOverrides, GameConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = GameConfig::load(dir.path().join("absent.toml")).expect("defaults");

    assert_eq!(config, GameConfig::default());
    assert_eq!(config.listen(), "0.0.0.0");
    assert_eq!(*config.port(), 23234);
    assert_eq!(config.blink_interval(), Duration::from_millis(500));
    assert_eq!(*config.seed(), None);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_games.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let file = write_config("port = 2323\nseed = 9\n");
    let config = GameConfig::load(file.path()).expect("valid config");

    assert_eq!(*config.port(), 2323);
    assert_eq!(*config.seed(), Some(9));
    assert_eq!(config.listen(), "0.0.0.0");
    assert_eq!(*config.blink_interval_ms(), 500);
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_config("colour = \"red\"\n");
    let err = GameConfig::from_file(file.path()).expect_err("unknown field");
    assert!(err.message.contains("Failed to parse config"), "{}", err);
}

#[test]
fn test_zero_blink_rejected() {
    let file = write_config("blink_interval_ms = 0\n");
    let err = GameConfig::load(file.path()).expect_err("zero blink");
    assert!(err.message.contains("blink_interval_ms"), "{}", err);
}

#[test]
fn test_unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    assert!(GameConfig::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("listen = \"127.0.0.1\"\nport = 4000\nblink_interval_ms = 250\n");
    let config = GameConfig::load(file.path())
        .and_then(|config| {
            config.merge(ConfigOverrides {
                port: Some(5000),
                seed: Some(1),
                ..Default::default()
            })
        })
        .expect("merged config");

    assert_eq!(config.listen(), "127.0.0.1");
    assert_eq!(*config.port(), 5000);
    assert_eq!(*config.blink_interval_ms(), 250);
    assert_eq!(*config.seed(), Some(1));
}

#[test]
fn test_zero_blink_override_rejected() {
    let overrides = ConfigOverrides {
        blink_interval_ms: Some(0),
        ..Default::default()
    };
    assert!(GameConfig::default().merge(overrides).is_err());
}

#[test]
fn test_seeded_session_rngs_are_reproducible() {
    let config = GameConfig::default()
        .merge(ConfigOverrides {
            seed: Some(42),
            ..Default::default()
        })
        .expect("seeded config");

    let first: Vec<u64> = (0..4).map(|id| config.session_rng(id).r#gen()).collect();
    let again: Vec<u64> = (0..4).map(|id| config.session_rng(id).r#gen()).collect();
    assert_eq!(first, again);
    assert_ne!(first[0], first[1]);
}
