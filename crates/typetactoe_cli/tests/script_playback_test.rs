//! Tests for loading scripts from disk and playing them back.

use std::io::Write;
use typetactoe::{MoveError, Outcome, Player};
use typetactoe_cli::{Script, ScriptError, play_script};

fn write_script(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write script");
    file
}

#[test]
fn test_replay_draw_script() {
    let file = write_script(
        r#"
first_player = "X"

[[moves]]
row = "TOP"
column = "LEFT"
player = "X"

[[moves]]
row = "MIDDLE"
column = "CENTER"
player = "O"

[[moves]]
row = "TOP"
column = "RIGHT"
player = "X"

[[moves]]
row = "TOP"
column = "CENTER"
player = "O"

[[moves]]
row = "BOTTOM"
column = "CENTER"
player = "X"

[[moves]]
row = "MIDDLE"
column = "LEFT"
player = "O"

[[moves]]
row = "MIDDLE"
column = "RIGHT"
player = "X"

[[moves]]
row = "BOTTOM"
column = "RIGHT"
player = "O"

[[moves]]
row = "BOTTOM"
column = "LEFT"
player = "X"
"#,
    );

    let script = Script::load(file.path()).expect("valid script");
    assert_eq!(script.moves.len(), 9);

    let mut out = Vec::new();
    let playback = play_script(&script, &mut out, true).expect("io");

    assert!(playback.error.is_none());
    assert_eq!(playback.board.status(), Outcome::Draw);
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.contains("Game over, nobody has won."));
}

#[test]
fn test_script_with_unknown_player_stops() {
    let file = write_script(
        r#"
first_player = "O"

[[moves]]
row = "TOP"
column = "LEFT"
player = "O"

[[moves]]
row = "TOP"
column = "CENTER"
player = "Y"
"#,
    );

    let script = Script::load(file.path()).expect("valid script");
    assert_eq!(script.first_player, Player::O);

    let mut out = Vec::new();
    let playback = play_script(&script, &mut out, false).expect("io");

    let error = playback.error.expect("second move rejected");
    assert_eq!(error.number, 2);
    assert_eq!(
        error.source,
        MoveError::InvalidPlayer {
            value: "Y".to_string(),
        }
    );
    assert_eq!(playback.board.next_player(), Player::X);
}

#[test]
fn test_missing_script_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.toml");

    assert!(matches!(
        Script::load(&path),
        Err(ScriptError::Read { .. })
    ));
}
