use std::fs;
use std::path::Path;

use crate::error::{EditorError, Result};

/// The text being edited, stored as a list of lines.
///
/// A document always holds at least one line; an empty document is a single
/// empty line. Columns are counted in Unicode scalar values, not bytes.
///
/// Mutation methods expect positions that the cursor has already clamped.
/// Passing an out-of-range position is a programming error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Create a document holding one empty line.
    pub fn empty() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Create a document by splitting `text` on line endings.
    ///
    /// A trailing newline does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(split_lines(text))
    }

    /// Create a document from pre-split lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            return Self::empty();
        }
        Self { lines }
    }

    /// Load a document from disk.
    ///
    /// A missing file yields an empty document. Invalid UTF-8 sequences are
    /// replaced with U+FFFD so partially-binary files stay editable.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Io`] when the path exists but cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read(path) {
            Ok(bytes) => {
                let doc = Self::from_text(&String::from_utf8_lossy(&bytes));
                tracing::info!(path = %path.display(), lines = doc.line_count(), "loaded document");
                Ok(doc)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "file not found, starting empty");
                Ok(Self::empty())
            }
            Err(err) => Err(EditorError::io(path, err)),
        }
    }

    /// Read the lines of an existing file, for appending into a document.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Io`] when the file is missing or unreadable.
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let bytes = fs::read(path).map_err(|err| EditorError::io(path, err))?;
        Ok(split_lines(&String::from_utf8_lossy(&bytes)))
    }

    /// Write the document to disk, lines joined with a single `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.text()).map_err(|err| EditorError::io(path, err))?;
        tracing::info!(path = %path.display(), lines = self.line_count(), "saved document");
        Ok(())
    }

    /// The full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The content of a line, or `None` past the last line.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(String::as_str)
    }

    /// Length of a line in characters (0 past the last line).
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map_or(0, |line| line.chars().count())
    }

    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    /// Insert `ch` so that it ends up at column `col`.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        self.check_position(row, col);
        let line = &mut self.lines[row];
        let idx = byte_index(line, col);
        line.insert(idx, ch);
    }

    /// Break line `row` at `col`; the tail becomes a new line below.
    pub fn split_line(&mut self, row: usize, col: usize) {
        self.check_position(row, col);
        let line = &mut self.lines[row];
        let idx = byte_index(line, col);
        let tail = line.split_off(idx);
        self.lines.insert(row + 1, tail);
    }

    /// Append line `row` onto line `row - 1` and remove it.
    pub fn join_with_previous(&mut self, row: usize) {
        debug_assert!(
            row > 0 && row < self.lines.len(),
            "join_with_previous({row}) out of bounds"
        );
        let line = self.lines.remove(row);
        self.lines[row - 1].push_str(&line);
    }

    /// Remove the character immediately before `col` on line `row`.
    pub fn delete_char_before(&mut self, row: usize, col: usize) {
        debug_assert!(col > 0, "delete_char_before at column 0");
        self.check_position(row, col);
        let line = &mut self.lines[row];
        let idx = byte_index(line, col - 1);
        line.remove(idx);
    }

    /// Replace every occurrence of `old` with `new` on every line.
    ///
    /// Returns the number of occurrences replaced. Matches never span lines.
    pub fn replace_all(&mut self, old: &str, new: &str) -> usize {
        let mut count = 0;
        for line in &mut self.lines {
            let hits = line.matches(old).count();
            if hits > 0 {
                *line = line.replace(old, new);
                count += hits;
            }
        }
        count
    }

    /// The whitespace-delimited word covering column `col` on line `row`.
    ///
    /// A cursor just past a word's last character is not on it.
    pub fn word_at(&self, row: usize, col: usize) -> Option<&str> {
        let line = self.line(row)?;
        let mut start = None;
        for (idx, (byte, ch)) in line.char_indices().enumerate() {
            if ch.is_whitespace() {
                if idx > col {
                    break;
                }
                start = None;
            } else if start.is_none() {
                start = Some(byte);
            }
            if idx == col {
                let begin = start?;
                let end = line[byte..]
                    .find(char::is_whitespace)
                    .map_or(line.len(), |off| byte + off);
                return Some(&line[begin..end]);
            }
        }
        None
    }

    /// Append lines after the last line.
    pub fn append_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    fn check_position(&self, row: usize, col: usize) {
        debug_assert!(
            row < self.lines.len() && col <= self.line_len(row),
            "position ({row}, {col}) out of bounds"
        );
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

/// Byte offset of character column `col` within `line`.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(idx, _)| idx)
}

/// Split on `\r\n`, `\n` or a lone `\r`; a final terminator adds no empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find(['\n', '\r']) {
        lines.push(rest[..idx].to_owned());
        let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + terminator..];
    }
    if !rest.is_empty() {
        lines.push(rest.to_owned());
    }
    lines
}
