//! Colon-command parsing.
//!
//! A command line is split on whitespace into a verb and arguments and
//! parsed into a [`Command`]. Arguments beyond the ones a verb uses are
//! ignored. Execution lives in the application layer.

use std::path::PathBuf;

use crate::error::{EditorError, Result};

/// Status text for `:help`.
pub const HELP_TEXT: &str = "Commands: :w [file] :q :q! :wq :e <file> :saveas <file> :r <file> \
:set syntax|number :open <file> :pwd :replace <old>/<new> :undo :redo :new :help";

/// A parsed colon command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save to the given path, or the current file name.
    Write(Option<PathBuf>),
    /// Leave the editor. `force` is accepted for `q!` but behaves the same.
    Quit { force: bool },
    /// Save to the current file name, then quit.
    WriteQuit,
    /// Replace the document with the contents of a file.
    Edit(PathBuf),
    /// Save under a new name and adopt it.
    SaveAs(PathBuf),
    /// Append a file's lines to the end of the document.
    Read(PathBuf),
    /// Flip a display toggle.
    Set(Setting),
    /// Replace every occurrence of `old` with `new`.
    Replace { old: String, new: String },
    Undo,
    Redo,
    /// Start over with an empty, unnamed document.
    New,
    Help,
    /// Hand a media file to the previewer.
    Open(PathBuf),
    /// Show the working directory.
    Pwd,
}

/// Display toggles forwarded to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Syntax,
    Number,
}

impl Command {
    /// Parse a command line without its leading `:`.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidCommand`] for unknown verbs or missing
    /// and malformed arguments.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match verb {
            "w" => Self::Write(arg.map(PathBuf::from)),
            "q" => Self::Quit { force: false },
            "q!" => Self::Quit { force: true },
            "wq" => Self::WriteQuit,
            "e" => Self::Edit(require_path(arg, "e <file>")?),
            "saveas" => Self::SaveAs(require_path(arg, "saveas <file>")?),
            "r" => Self::Read(require_path(arg, "r <file>")?),
            "open" => Self::Open(require_path(arg, "open <file>")?),
            "set" => Self::Set(parse_setting(arg)?),
            "replace" => parse_replace(arg)?,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "new" => Self::New,
            "help" => Self::Help,
            "pwd" => Self::Pwd,
            other => {
                return Err(EditorError::InvalidCommand(format!(
                    "Unknown command: {other}"
                )));
            }
        };
        Ok(Some(command))
    }
}

fn require_path(arg: Option<&str>, usage: &str) -> Result<PathBuf> {
    arg.map(PathBuf::from)
        .ok_or_else(|| EditorError::InvalidCommand(format!("Usage: :{usage}")))
}

fn parse_setting(arg: Option<&str>) -> Result<Setting> {
    match arg {
        Some("syntax") => Ok(Setting::Syntax),
        Some("number") => Ok(Setting::Number),
        Some(other) => Err(EditorError::InvalidCommand(format!(
            "Unknown option: {other}"
        ))),
        None => Err(EditorError::InvalidCommand(
            "Usage: :set syntax|number".to_string(),
        )),
    }
}

/// `old/new`, split at the first `/`. `new` may be empty; `old` may not.
fn parse_replace(arg: Option<&str>) -> Result<Command> {
    let usage = || EditorError::InvalidCommand("Usage: :replace old/new".to_string());
    let (old, new) = arg.and_then(|a| a.split_once('/')).ok_or_else(usage)?;
    if old.is_empty() {
        return Err(usage());
    }
    Ok(Command::Replace {
        old: old.to_string(),
        new: new.to_string(),
    })
}
