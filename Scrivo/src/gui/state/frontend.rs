//! Floem + rfd implementation of the editor shell's frontend traits

use std::path::{Path, PathBuf};

use floem::action::exec_after;
use floem::prelude::*;
use scrivo_core::{Confirmation, Dialogs, STATUS_TIMEOUT, Status, TextSurface, WindowChrome};

use crate::gui::utils::dialogs;

use super::EditorState;

pub struct FloemFrontend<'a> {
    state: &'a EditorState,
}

impl<'a> FloemFrontend<'a> {
    pub fn new(state: &'a EditorState) -> Self {
        Self { state }
    }
}

impl TextSurface for FloemFrontend<'_> {
    fn text(&self) -> String {
        self.state.document.with_untracked(|doc| match doc {
            Some(doc) => doc.text().to_string(),
            None => self.state.content.get_untracked(),
        })
    }

    fn replace_text(&mut self, text: String) {
        // The old document is stale until the view is rebuilt
        self.state.document.set(None);
        self.state.content.set(text);
        self.state.generation.update(|g| *g += 1);
    }
}

impl Dialogs for FloemFrontend<'_> {
    fn confirm_discard(&mut self) -> Confirmation {
        dialogs::confirm_discard()
    }

    fn offer_save_before_exit(&mut self) -> bool {
        dialogs::offer_save_before_exit()
    }

    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        dialogs::pick_open_file(start_dir)
    }

    fn choose_save_path(
        &mut self,
        start_dir: Option<&Path>,
        current: Option<&Path>,
    ) -> Option<PathBuf> {
        dialogs::pick_save_file(start_dir, current)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        dialogs::show_error(title, message);
    }

    fn show_info(&mut self, title: &str, message: &str) {
        dialogs::show_info(title, message);
    }
}

impl WindowChrome for FloemFrontend<'_> {
    fn set_title(&mut self, title: &str) {
        self.state.title.set(title.to_string());
    }

    fn show_status(&mut self, status: &Status) {
        let slot = self.state.status;
        let Some(ticket) = slot.try_update(|slot| slot.post(status.clone())) else {
            return;
        };

        exec_after(STATUS_TIMEOUT, move |_| {
            slot.update(|slot| {
                slot.expire(ticket);
            });
        });
    }
}
