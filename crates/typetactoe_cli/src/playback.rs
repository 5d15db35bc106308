//! Drives a board from a script or from interactive input, printing the
//! board and status after each move.

use crate::script::{Script, ScriptMove};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use typetactoe::{Board, MoveError, Outcome, Player};

/// A scripted move the board rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} ({}) rejected: {}", number, mov, source)]
pub struct PlaybackError {
    /// One-based position of the move in the script.
    pub number: usize,
    /// The rejected move.
    pub mov: ScriptMove,
    /// Why the board rejected it.
    pub source: MoveError,
}

/// Result of playing a script: the last board reached and the first
/// rejected move, if any.
#[derive(Debug, Clone)]
pub struct Playback {
    /// Board after the last accepted move.
    pub board: Board,
    /// The rejection that stopped playback.
    pub error: Option<PlaybackError>,
}

fn print_board(out: &mut impl Write, board: &Board) -> std::io::Result<()> {
    writeln!(out, "{}", board.render())?;
    writeln!(out, "{}", board.status())?;
    writeln!(out)
}

/// Plays every move of `script` in order, stopping at the first rejection.
///
/// Unless `quiet`, the board and status are written after each accepted
/// move; the final board is always written.
#[instrument(skip(script, out), fields(moves = script.moves.len()))]
pub fn play_script(
    script: &Script,
    out: &mut impl Write,
    quiet: bool,
) -> std::io::Result<Playback> {
    let mut board = Board::new(script.first_player);

    for (i, mov) in script.moves.iter().enumerate() {
        match board.play(&mov.row, &mov.column, &mov.player) {
            Ok(next) => {
                board = next;
                if !quiet {
                    print_board(out, &board)?;
                }
            }
            Err(source) => {
                let error = PlaybackError {
                    number: i + 1,
                    mov: mov.clone(),
                    source,
                };
                warn!(%error, "Playback stopped");
                if quiet {
                    print_board(out, &board)?;
                }
                writeln!(out, "{error}")?;
                return Ok(Playback {
                    board,
                    error: Some(error),
                });
            }
        }
    }

    if quiet {
        print_board(out, &board)?;
    }
    info!(status = %board.status(), "Playback finished");
    Ok(Playback { board, error: None })
}

/// Parses an interactive line of the form `ROW COLUMN` or `ROW-COLUMN`.
fn parse_cell(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    line.split_once('-')
        .or_else(|| line.split_once(char::is_whitespace))
        .map(|(row, column)| (row.trim(), column.trim()))
}

/// Plays a game from line input, always moving for the player whose turn
/// it is. Rejected moves are reported and the same player is asked again.
///
/// Returns the outcome when the game is decided or the input ends.
#[instrument(skip(input, out))]
pub fn play_interactive(
    first_player: Player,
    input: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<Outcome> {
    let mut board = Board::new(first_player);
    let mut lines = input.lines();

    print_board(out, &board)?;
    while !board.status().is_over() {
        write!(out, "{} > ", board.next_player())?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("Input ended before the game was decided");
            break;
        };

        let Some((row, column)) = parse_cell(&line) else {
            writeln!(out, "Enter a cell as ROW COLUMN, e.g. TOP LEFT")?;
            continue;
        };

        let player = board.next_player().to_string();
        match board.play(row, column, &player) {
            Ok(next) => {
                board = next;
                writeln!(out)?;
                print_board(out, &board)?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
    }

    Ok(board.status())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(moves: &[&str]) -> Script {
        let moves: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
        Script::from_inline(Player::X, &moves).expect("well formed")
    }

    #[test]
    fn test_script_prints_each_board() {
        let mut out = Vec::new();
        let playback = play_script(&script(&["TOP-LEFT:X", "MIDDLE-CENTER:O"]), &mut out, false)
            .expect("writes succeed");

        assert!(playback.error.is_none());
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text.matches("---+---+---").count(), 4);
        assert!(text.contains("Your move, player \"O\"..."));
        assert!(text.ends_with("Your move, player \"X\"...\n\n"));
    }

    #[test]
    fn test_script_stops_at_rejection() {
        let mut out = Vec::new();
        let playback = play_script(
            &script(&["TOP-LEFT:X", "TOP-LEFT:O", "MIDDLE-CENTER:O"]),
            &mut out,
            true,
        )
        .expect("writes succeed");

        let error = playback.error.expect("second move rejected");
        assert_eq!(error.number, 2);
        assert!(matches!(error.source, MoveError::CellOccupied { .. }));
        assert_eq!(playback.board.history().len(), 1);

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains(
            "Move 2 (TOP-LEFT:O) rejected: Illegal move: TOP-LEFT is already occupied by \"X\""
        ));
        assert_eq!(text.matches("---+---+---").count(), 2);
    }

    #[test]
    fn test_parse_cell_forms() {
        assert_eq!(parse_cell("TOP LEFT"), Some(("TOP", "LEFT")));
        assert_eq!(parse_cell(" middle-center \n"), Some(("middle", "center")));
        assert_eq!(parse_cell("TOPLEFT"), None);
    }

    #[test]
    fn test_interactive_reprompts_after_rejection() {
        let input = "TOP LEFT\nTOP LEFT\nMIDDLE LEFT\nTOP CENTER\nMIDDLE CENTER\nTOP RIGHT\n";
        let mut out = Vec::new();

        let outcome = play_interactive(Player::X, input.as_bytes(), &mut out).expect("io");

        assert_eq!(outcome, Outcome::Won(Player::X));
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains(
            "Illegal move: TOP-LEFT is already occupied by \"X\""
        ));
        assert!(text.contains("Player \"X\" has won."));
    }

    #[test]
    fn test_interactive_stops_at_end_of_input() {
        let mut out = Vec::new();
        let outcome = play_interactive(Player::O, "BOTTOM RIGHT\n".as_bytes(), &mut out)
            .expect("io");
        assert_eq!(outcome, Outcome::InProgress(Player::X));
    }
}
