//! Seams between the editor shell and the GUI toolkit
//!
//! Dialogs are plain blocking calls that return an answer; the shell never
//! deals in callbacks.

use std::path::{Path, PathBuf};

use crate::status::Status;

/// Answer to the discard-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Discard,
    Keep,
}

/// The editable text widget. It owns the buffer.
pub trait TextSurface {
    /// Current full contents.
    fn text(&self) -> String;

    /// Replace the whole buffer, e.g. after loading a file.
    fn replace_text(&mut self, text: String);

    fn clear(&mut self) {
        self.replace_text(String::new());
    }
}

/// Modal dialogs
pub trait Dialogs {
    /// "Text was modified, discard changes?"
    fn confirm_discard(&mut self) -> Confirmation;

    /// The window is already gone and the text is modified: save it first?
    fn offer_save_before_exit(&mut self) -> bool;

    /// Pick an existing file. `None` when the dialog was cancelled.
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Pick a save destination. `current` pre-fills the name and directory.
    fn choose_save_path(
        &mut self,
        start_dir: Option<&Path>,
        current: Option<&Path>,
    ) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);

    fn show_info(&mut self, title: &str, message: &str);
}

/// Window decorations the shell keeps up to date
pub trait WindowChrome {
    fn set_title(&mut self, title: &str);

    /// Show `status`; the frontend clears it after [`crate::STATUS_TIMEOUT`].
    fn show_status(&mut self, status: &Status);
}

/// Everything the shell needs from the toolkit.
pub trait Frontend: TextSurface + Dialogs + WindowChrome {}

impl<T: TextSurface + Dialogs + WindowChrome> Frontend for T {}
