//! Error types for `ScrivoCore`

use std::path::PathBuf;

use thiserror::Error;

/// Which file prompt the user dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// "Choose a file to open"
    Open,
    /// Destination prompt shown by Save on an unbacked document.
    Save,
    /// Destination prompt shown by Save As.
    SaveAs,
}

impl PromptKind {
    fn cancel_message(self) -> &'static str {
        match self {
            Self::Open => "Failed to choose file to open!",
            Self::Save => "Failed to choose name for file!",
            Self::SaveAs => "Failed to choose new name for file!",
        }
    }
}

/// The error type for editor shell operations.
///
/// Every variant is user-facing: the shell reports it through the status bar
/// and a modal error dialog, never by unwinding.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Prompt Errors ====================
    /// The file prompt was closed without choosing a path.
    #[error("{}", .0.cancel_message())]
    SelectionCancelled(PromptKind),

    // ==================== File Errors ====================
    /// The chosen file could not be read.
    #[error("Could not open '{}':\n\n{source}", .path.display())]
    Read {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// The destination could not be written.
    #[error("Could not save '{}':\n\n{source}", .path.display())]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Settings Errors ====================
    /// Settings file exists but is not valid JSON for [`crate::Settings`].
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// IO error outside of document reads and writes.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Title for the modal error dialog.
    pub fn dialog_title(&self) -> &'static str {
        match self {
            Self::SelectionCancelled(PromptKind::Open) | Self::Read { .. } => "Open error",
            Self::SelectionCancelled(_) | Self::Write { .. } => "Save error",
            Self::Settings(_) | Self::Io(_) => "Error",
        }
    }

    /// Short text for the status bar.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::SelectionCancelled(PromptKind::Open) | Self::Read { .. } => "File was not opened",
            Self::SelectionCancelled(_) | Self::Write { .. } => "File was not saved",
            Self::Settings(_) | Self::Io(_) => "Operation failed",
        }
    }
}

/// Result type for `ScrivoCore` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_open_reporting() {
        let err = Error::SelectionCancelled(PromptKind::Open);
        assert_eq!(err.dialog_title(), "Open error");
        assert_eq!(err.status_text(), "File was not opened");
        assert_eq!(err.to_string(), "Failed to choose file to open!");
    }

    #[test]
    fn test_write_error_names_file() {
        let err = Error::Write {
            path: PathBuf::from("/nope/a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.dialog_title(), "Save error");
        assert_eq!(err.status_text(), "File was not saved");
        assert!(err.to_string().contains("/nope/a.txt"));
        assert!(err.to_string().contains("denied"));
    }
}
