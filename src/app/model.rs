use std::path::{Path, PathBuf};

use crate::editor::{Cursor, Document, History, Selection};
use crate::error::Result;
use crate::ui::viewport::Viewport;

/// The active interpretation context for key input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    Visual,
    Command,
}

impl Mode {
    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Visual => "VISUAL",
            Self::Command => "COMMAND",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Status {
    level: StatusLevel,
    message: String,
}

/// The complete editor state.
///
/// All state lives here - no global or scattered state. The document,
/// cursor, and history are only mutated through [`super::update`].
#[derive(Debug)]
pub struct Model {
    /// The text being edited
    pub document: Document,
    /// Current cursor position, always inside `document`
    pub cursor: Cursor,
    /// Active input mode
    pub mode: Mode,
    /// Visual-mode selection; `None` outside VISUAL
    pub selection: Option<Selection>,
    /// Text typed after `:` or `/`; a search keeps its leading `/`
    pub command_buffer: String,
    /// Undo/redo snapshots
    pub history: History,
    /// File the document is saved to, if named
    pub file_path: Option<PathBuf>,
    /// Whether the renderer should syntax-highlight lines
    pub syntax_enabled: bool,
    /// Whether the renderer should draw the line-number gutter
    pub show_line_numbers: bool,
    /// Set by any content change, cleared by load and save
    pub dirty: bool,
    /// Whether the editor should exit
    pub should_quit: bool,
    /// Scroll state owned by the renderer
    pub viewport: Viewport,
    /// ASCII image preview shown as an overlay until the next key
    pub preview: Option<Vec<String>>,
    status: Option<Status>,
    preview_request: Option<PathBuf>,
}

impl Model {
    /// Create a model for `document`, optionally bound to a file name.
    pub fn new(document: Document, file_path: Option<PathBuf>, terminal_size: (u16, u16)) -> Self {
        let total_lines = document.line_count();
        Self {
            document,
            cursor: Cursor::new(),
            mode: Mode::Normal,
            selection: None,
            command_buffer: String::new(),
            history: History::new(),
            file_path,
            syntax_enabled: true,
            show_line_numbers: true,
            dirty: false,
            should_quit: false,
            viewport: Viewport::new(
                terminal_size.0,
                terminal_size.1.saturating_sub(2),
                total_lines,
            ),
            preview: None,
            status: None,
            preview_request: None,
        }
    }

    /// Create a model by loading `path` (a missing file starts empty).
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file exists but cannot be read.
    pub fn open(path: Option<PathBuf>, terminal_size: (u16, u16)) -> Result<Self> {
        let document = match &path {
            Some(p) => Document::load(p)?,
            None => Document::empty(),
        };
        Ok(Self::new(document, path, terminal_size))
    }

    /// Set a one-shot status message, replacing any pending one.
    pub fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some(Status {
            level,
            message: message.into(),
        });
    }

    /// The pending status message, if any.
    pub fn status(&self) -> Option<(&str, StatusLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.message.as_str(), status.level))
    }

    /// Clear the status after it has been displayed once.
    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// The file name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .as_deref()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Ask the previewer to show `path` once the current update finishes.
    pub(super) fn request_preview(&mut self, path: PathBuf) {
        self.preview_request = Some(path);
    }

    pub(super) fn take_preview_request(&mut self) -> Option<PathBuf> {
        self.preview_request.take()
    }

    /// Record the document state before an edit.
    pub(super) fn snapshot(&mut self) {
        self.history.snapshot(&self.document);
        self.dirty = true;
    }

    /// Replace the document wholesale, resetting cursor and mode state.
    pub(super) fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.reset_cursor_state();
    }

    pub(super) fn reset_cursor_state(&mut self) {
        self.cursor = Cursor::new();
        self.selection = None;
        self.command_buffer.clear();
        self.viewport.go_to_top();
    }
}
