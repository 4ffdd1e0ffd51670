//! Native dialogs (rfd)
//!
//! All of these block until the user answers.

use std::path::{Path, PathBuf};

use scrivo_core::Confirmation;

/// "Text was modified, discard changes?"
pub fn confirm_discard() -> Confirmation {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Text not saved")
        .set_description("Text was modified, discard changes?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show();

    if result == rfd::MessageDialogResult::Yes {
        Confirmation::Discard
    } else {
        Confirmation::Keep
    }
}

/// Last chance after the system closed the window. Yes saves.
pub fn offer_save_before_exit() -> bool {
    let result = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title("Text not saved")
        .set_description("The window was closed while the text was modified. Save changes?")
        .set_buttons(rfd::MessageButtons::YesNo)
        .show();

    result == rfd::MessageDialogResult::Yes
}

pub fn pick_open_file(start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open File")
        .add_filter("All Files", &["*"]);

    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

/// Save destination. Suggests `.txt` but accepts any name.
pub fn pick_save_file(start_dir: Option<&Path>, current: Option<&Path>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Save File")
        .add_filter("Text file", &["txt"])
        .add_filter("All Files", &["*"]);

    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }
    // Pre-fill the current name if available
    if let Some(filename) = current.and_then(Path::file_name).and_then(|n| n.to_str()) {
        dialog = dialog.set_file_name(filename);
    }

    dialog.save_file()
}

/// Critical error dialog (blocking)
pub fn show_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

pub fn show_info(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}
