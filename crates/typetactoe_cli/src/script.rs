//! Game scripts: ordered moves to play back against a board.
//!
//! Scripts are read from TOML files or from inline `ROW-COLUMN:PLAYER`
//! arguments. Symbols stay as written so the board reports bad ones.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use typetactoe::Player;

/// Errors loading a script.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScriptError {
    /// Script file could not be read.
    #[display("Failed to read script {}: {}", path, message)]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O message.
        message: String,
    },
    /// Script file is not valid TOML for a script.
    #[display("Failed to parse script: {}", message)]
    Parse {
        /// Parser message.
        message: String,
    },
    /// Inline move is not of the form ROW-COLUMN:PLAYER.
    #[display("Malformed move \"{}\", expected ROW-COLUMN:PLAYER", value)]
    MalformedMove {
        /// Argument as given.
        value: String,
    },
}

/// One scripted move, kept as the symbols written in the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ScriptMove {
    /// Row symbol (TOP, MIDDLE, BOTTOM).
    #[new(into)]
    pub row: String,
    /// Column symbol (LEFT, CENTER, RIGHT).
    #[new(into)]
    pub column: String,
    /// Player symbol (X, O).
    #[new(into)]
    pub player: String,
}

impl std::fmt::Display for ScriptMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.row, self.column, self.player)
    }
}

impl std::str::FromStr for ScriptMove {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScriptError::MalformedMove {
            value: s.to_string(),
        };
        let (cell, player) = s.split_once(':').ok_or_else(malformed)?;
        let (row, column) = cell.split_once('-').ok_or_else(malformed)?;
        Ok(Self::new(row.trim(), column.trim(), player.trim()))
    }
}

/// A game script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Script {
    /// Player who moves first.
    #[serde(default)]
    pub first_player: Player,
    /// Moves in play order.
    #[serde(default)]
    pub moves: Vec<ScriptMove>,
}

impl Script {
    /// Parses a script from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml(text: &str) -> Result<Self, ScriptError> {
        toml::from_str(text).map_err(|e| ScriptError::Parse {
            message: e.to_string(),
        })
    }

    /// Loads a script from a TOML file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let text = std::fs::read_to_string(path).map_err(|e| ScriptError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let script = Self::from_toml(&text)?;
        debug!(moves = script.moves.len(), first = %script.first_player, "Loaded script");
        Ok(script)
    }

    /// Builds a script from inline `ROW-COLUMN:PLAYER` arguments.
    #[instrument(skip(moves))]
    pub fn from_inline(first_player: Player, moves: &[String]) -> Result<Self, ScriptError> {
        let moves = moves
            .iter()
            .map(|m| m.parse())
            .collect::<Result<Vec<ScriptMove>, _>>()?;
        Ok(Self {
            first_player,
            moves,
        })
    }
}
