//! Document session: current file path and dirty flag
//!
//! The text itself lives in the editor widget; the session only tracks where it
//! came from and whether it changed since the last load or save.

use std::path::{Path, PathBuf};

/// Marker prepended to the window title while there are unsaved changes.
pub const MODIFIED_MARKER: char = '*';

/// Separator between the base title and the file name.
pub const TITLE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSession {
    path: Option<PathBuf>,
    dirty: bool,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// File name shown in the title, or `None` for an unbacked document
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
    }

    /// Record a content change. Returns true only on the clean -> dirty edge.
    pub fn mark_modified(&mut self) -> bool {
        if self.dirty {
            return false;
        }
        self.dirty = true;
        true
    }

    /// The buffer now matches `path` on disk (after a load or save).
    pub fn mark_clean(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.dirty = false;
    }

    /// Fresh unbacked document.
    pub fn reset(&mut self) {
        self.path = None;
        self.dirty = false;
    }

    /// Directory of the backing file, used as a starting point for prompts
    pub fn directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }

    /// `[*]<base>[ - <file name>]`
    pub fn window_title(&self, base: &str) -> String {
        let mut title = String::new();
        if self.dirty {
            title.push(MODIFIED_MARKER);
        }
        title.push_str(base);
        if let Some(name) = self.file_name() {
            title.push_str(TITLE_SEPARATOR);
            title.push_str(&name);
        }
        title
    }
}
