//! User-facing commands and their keyboard shortcuts
//!
//! Menu items, toolbar buttons and key bindings all resolve to a [`Command`]
//! and go through [`crate::EditorShell::execute`].

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open,
    /// Open a known path (recent files list, command line)
    OpenPath(PathBuf),
    Save,
    SaveAs,
    ClearRecent,
    Exit,
    About,
}

impl Command {
    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Open => "Open...",
            Self::OpenPath(_) => "Open Recent",
            Self::Save => "Save",
            Self::SaveAs => "Save As...",
            Self::ClearRecent => "Clear Recent Files",
            Self::Exit => "Exit",
            Self::About => "About",
        }
    }

    /// Resolve a Ctrl/Cmd chord to a command.
    ///
    /// `key` is the logical character of the key; case is ignored.
    pub fn from_shortcut(key: &str, shift: bool) -> Option<Self> {
        let key = key.to_ascii_lowercase();
        match (key.as_str(), shift) {
            ("n", false) => Some(Self::New),
            ("o", false) => Some(Self::Open),
            ("s", false) => Some(Self::Save),
            ("s", true) => Some(Self::SaveAs),
            ("q", false) => Some(Self::Exit),
            _ => None,
        }
    }

    /// Whether running this command replaces the current buffer.
    /// Exit is not included; it goes through the close request instead.
    pub fn discards_buffer(&self) -> bool {
        matches!(self, Self::New | Self::Open | Self::OpenPath(_))
    }
}
