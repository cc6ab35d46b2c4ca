//! Loads configuration files from disk.

use noughts::GameConfig;
use noughts_engine::{Marker, Opponent};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_from_file_reads_every_field() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "player_a = \"Ada\"\nplayer_b = \"Grace\"\nopponent = \"human\"\nsearch_depth = 4\nlog_filter = \"debug\""
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_a(), "Ada");
    assert_eq!(config.player_b(), "Grace");
    assert_eq!(config.opponent(), &Opponent::Human);
    assert_eq!(config.search_depth(), &Some(4));
    assert_eq!(config.log_filter(), "debug");

    let session = config.session();
    assert_eq!(session.player(Marker::O).name, "Grace");
    assert_eq!(session.computer_marker(), None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"grandmaster\"").unwrap();

    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_human_opponent_in_file_seats_a_human_name() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"human\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_b(), "Player 2");

    let session = config.session();
    assert_eq!(session.player(Marker::O).name, "Player 2");
    assert_eq!(session.computer_marker(), None);
}

#[test]
fn test_cli_names_override_file_names() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "opponent = \"random\"\nplayer_b = \"Dealer\"").unwrap();

    let config = GameConfig::from_file(file.path())
        .unwrap()
        .with_overrides(Some(Opponent::Human), None, Some("Grace".to_string()), None);
    assert_eq!(config.player_b(), "Grace");
    assert_eq!(config.opponent(), &Opponent::Human);
}
