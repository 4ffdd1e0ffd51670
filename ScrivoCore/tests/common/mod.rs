//! In-memory frontend with scripted dialog answers

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use scrivo_core::{Confirmation, Dialogs, EditorShell, Status, TextSurface, WindowChrome};

#[derive(Default)]
pub struct ScriptedFrontend {
    pub text: String,
    pub title: String,
    pub statuses: Vec<Status>,
    /// (title, message) of every error dialog shown
    pub errors: Vec<(String, String)>,
    pub infos: Vec<(String, String)>,

    pub confirmations: VecDeque<Confirmation>,
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    pub save_offers: VecDeque<bool>,

    pub confirm_prompts: usize,
    pub open_prompts: usize,
    pub save_prompts: usize,
    pub save_offer_prompts: usize,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the user typing at the end of the buffer
    pub fn type_text(&mut self, shell: &mut EditorShell, typed: &str) {
        self.text.push_str(typed);
        shell.text_changed(self);
    }

    pub fn answer_confirm(&mut self, answer: Confirmation) -> &mut Self {
        self.confirmations.push_back(answer);
        self
    }

    pub fn answer_open(&mut self, path: Option<&Path>) -> &mut Self {
        self.open_answers.push_back(path.map(Path::to_path_buf));
        self
    }

    pub fn answer_save(&mut self, path: Option<&Path>) -> &mut Self {
        self.save_answers.push_back(path.map(Path::to_path_buf));
        self
    }

    pub fn answer_save_offer(&mut self, save: bool) -> &mut Self {
        self.save_offers.push_back(save);
        self
    }

    /// What the GUI does on startup
    pub fn set_title_from(&mut self, shell: &EditorShell) {
        self.title = shell.window_title();
    }

    pub fn last_status(&self) -> &Status {
        self.statuses.last().expect("no status reported")
    }

    pub fn prompt_count(&self) -> usize {
        self.confirm_prompts + self.open_prompts + self.save_prompts + self.save_offer_prompts
    }
}

impl TextSurface for ScriptedFrontend {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn replace_text(&mut self, text: String) {
        self.text = text;
    }
}

impl Dialogs for ScriptedFrontend {
    fn confirm_discard(&mut self) -> Confirmation {
        self.confirm_prompts += 1;
        self.confirmations
            .pop_front()
            .expect("unexpected discard confirmation")
    }

    fn offer_save_before_exit(&mut self) -> bool {
        self.save_offer_prompts += 1;
        self.save_offers
            .pop_front()
            .expect("unexpected save-before-exit offer")
    }

    fn choose_open_path(&mut self, _start_dir: Option<&Path>) -> Option<PathBuf> {
        self.open_prompts += 1;
        self.open_answers.pop_front().expect("unexpected open prompt")
    }

    fn choose_save_path(
        &mut self,
        _start_dir: Option<&Path>,
        _current: Option<&Path>,
    ) -> Option<PathBuf> {
        self.save_prompts += 1;
        self.save_answers.pop_front().expect("unexpected save prompt")
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn show_info(&mut self, title: &str, message: &str) {
        self.infos.push((title.to_string(), message.to_string()));
    }
}

impl WindowChrome for ScriptedFrontend {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_status(&mut self, status: &Status) {
        self.statuses.push(status.clone());
    }
}
