//! Typetactoe CLI library - script loading and playback for the binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod playback;
mod script;

pub use cli::{Cli, Command};
pub use playback::{Playback, PlaybackError, play_interactive, play_script};
pub use script::{Script, ScriptError, ScriptMove};
