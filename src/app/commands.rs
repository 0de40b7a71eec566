use std::path::{Path, PathBuf};

use crate::app::Model;
use crate::app::model::StatusLevel;
use crate::command::{Command, HELP_TEXT, Setting};
use crate::editor::Document;
use crate::error::{EditorError, Result};
use crate::media::MediaKind;
use crate::search;

impl Model {
    /// Run a submitted command-line buffer: a `/term` search or a colon command.
    ///
    /// This is where command failures stop: every error becomes a status
    /// message and the editor keeps running.
    pub(super) fn run_command_line(&mut self, line: &str) {
        let line = line.trim();
        if let Some(term) = line.strip_prefix('/') {
            self.run_search(term);
            return;
        }
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(()),
        });
        if let Err(err) = result {
            tracing::warn!(command = line, %err, "command failed");
            self.set_status(StatusLevel::Error, err.to_string());
        }
    }

    /// Execute a parsed command against the editor state.
    ///
    /// # Errors
    ///
    /// Returns the failure for the caller to report; the model is left as it
    /// was before the failing step.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Write(path) => self.write(path.as_deref())?,
            Command::Quit { force } => {
                tracing::debug!(force, dirty = self.dirty, "quit requested");
                self.should_quit = true;
            }
            Command::WriteQuit => {
                self.write(None)?;
                self.should_quit = true;
            }
            Command::Edit(path) => {
                let document = Document::load(&path)?;
                self.replace_document(document);
                self.history.clear();
                self.dirty = false;
                self.set_status(StatusLevel::Info, format!("Opened {}", path.display()));
                self.file_path = Some(path);
            }
            Command::SaveAs(path) => self.write(Some(&path))?,
            Command::Read(path) => {
                let lines = Document::read_lines(&path)?;
                self.snapshot();
                self.document.append_lines(lines);
                self.set_status(StatusLevel::Info, format!("Appended {}", path.display()));
            }
            Command::Set(Setting::Syntax) => {
                self.syntax_enabled = !self.syntax_enabled;
                let state = on_off(self.syntax_enabled);
                self.set_status(StatusLevel::Info, format!("Syntax {state}"));
            }
            Command::Set(Setting::Number) => {
                self.show_line_numbers = !self.show_line_numbers;
                let state = on_off(self.show_line_numbers);
                self.set_status(StatusLevel::Info, format!("Line numbers {state}"));
            }
            Command::Replace { old, new } => {
                self.snapshot();
                let count = self.document.replace_all(&old, &new);
                self.cursor = self.cursor.clamped(&self.document);
                self.set_status(
                    StatusLevel::Info,
                    format!("Replaced {count} occurrence(s) of '{old}' with '{new}'"),
                );
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::New => {
                self.snapshot();
                self.replace_document(Document::empty());
                self.file_path = None;
                self.dirty = false;
                self.set_status(StatusLevel::Info, "New buffer");
            }
            Command::Help => self.set_status(StatusLevel::Info, HELP_TEXT),
            Command::Open(path) => {
                if MediaKind::for_path(&path).is_none() {
                    return Err(EditorError::InvalidCommand(format!(
                        "Cannot preview: {}",
                        path.display()
                    )));
                }
                self.request_preview(path);
            }
            Command::Pwd => {
                let cwd = std::env::current_dir().map_err(|err| EditorError::io(".", err))?;
                self.set_status(StatusLevel::Info, cwd.display().to_string());
            }
        }
        Ok(())
    }

    pub(super) fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            self.cursor = self.cursor.clamped(&self.document);
            self.dirty = true;
            self.set_status(StatusLevel::Info, "Undo");
        } else {
            self.set_status(StatusLevel::Warning, "Nothing to undo");
        }
    }

    pub(super) fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            self.cursor = self.cursor.clamped(&self.document);
            self.dirty = true;
            self.set_status(StatusLevel::Info, "Redo");
        } else {
            self.set_status(StatusLevel::Warning, "Nothing to redo");
        }
    }

    fn run_search(&mut self, term: &str) {
        match search::find(term, &self.document, 0) {
            Some(found) => {
                self.cursor = found;
                self.set_status(
                    StatusLevel::Info,
                    format!("Found '{term}' at Ln {}", found.row + 1),
                );
            }
            None => self.set_status(StatusLevel::Warning, format!("'{term}' not found")),
        }
    }

    /// Save to `path`, or to the current file name; a given path is adopted.
    fn write(&mut self, path: Option<&Path>) -> Result<()> {
        let target: PathBuf = path
            .map(Path::to_path_buf)
            .or_else(|| self.file_path.clone())
            .ok_or(EditorError::NoFileName)?;
        self.document.save(&target)?;
        self.set_status(StatusLevel::Info, format!("Saved to {}", target.display()));
        self.file_path = Some(target);
        self.dirty = false;
        Ok(())
    }
}

const fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
