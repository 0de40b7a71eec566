//! Recoverable editor failures.
//!
//! Every variant here is surfaced to the user as a status message by the
//! command dispatcher. Out-of-bounds positions are not represented: the
//! cursor clamping contract makes them programming errors.

use std::path::PathBuf;

use thiserror::Error;

/// A failure that aborts one operation but leaves the editor running.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Unknown verb or malformed arguments.
    #[error("{0}")]
    InvalidCommand(String),
    /// `:w` without a path on an unnamed document.
    #[error("No filename specified")]
    NoFileName,
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = EditorError::io(
            "notes.txt",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "notes.txt: denied");
    }

    #[test]
    fn test_invalid_command_message_is_verbatim() {
        let err = EditorError::InvalidCommand("Unknown command: zz".to_string());
        assert_eq!(err.to_string(), "Unknown command: zz");
    }
}
