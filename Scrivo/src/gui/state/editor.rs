//! Editor window state

use std::path::PathBuf;
use std::rc::Rc;

use floem::prelude::*;
use floem::views::editor::text::Document;
use floem::views::editor::text_document::TextDocument;
use scrivo_core::{Command, EditorShell, Flow, StatusSlot};

use super::frontend::FloemFrontend;

/// State for the single editor window
#[derive(Clone)]
pub struct EditorState {
    /// Session + settings. Commands run on a copy which is written back afterwards,
    /// so no borrow of this signal is held while a modal dialog is open.
    pub shell: RwSignal<EditorShell>,
    /// Text the editor view is (re)built with
    pub content: RwSignal<String>,
    /// Document of the live editor view. `None` between a buffer replacement
    /// and the rebuild of the view, when `content` is authoritative.
    pub document: RwSignal<Option<Rc<dyn Document>>>,
    /// Bumped to rebuild the editor view from `content`
    pub generation: RwSignal<u64>,
    pub title: RwSignal<String>,
    pub status: RwSignal<StatusSlot>,
    pub window_size: RwSignal<(f64, f64)>,
}

impl EditorState {
    pub fn new(shell: EditorShell) -> Self {
        let title = shell.window_title();
        let window_size = shell.settings().window.size();
        Self {
            shell: RwSignal::new(shell),
            content: RwSignal::new(String::new()),
            document: RwSignal::new(None),
            generation: RwSignal::new(0),
            title: RwSignal::new(title),
            status: RwSignal::new(StatusSlot::new()),
            window_size: RwSignal::new(window_size),
        }
    }

    /// Run a command from the menu, title bar, toolbar or keyboard
    pub fn dispatch(&self, command: Command) {
        if command == Command::Exit {
            if self.request_close() {
                crate::gui::quit();
            }
            return;
        }

        let mut shell = self.shell.get_untracked();
        let flow = shell.execute(command, &mut FloemFrontend::new(self));
        self.shell.set(shell);
        if flow == Flow::Quit {
            crate::gui::quit();
        }
    }

    /// Track the document of a freshly built editor view
    pub fn attach_document(&self, doc: Rc<dyn Document>) {
        // Every buffer delta: keys, IME commits, paste, undo
        if let Ok(text_doc) = doc.clone().downcast_rc::<TextDocument>() {
            let state = self.clone();
            text_doc.add_on_update(move |_| state.text_changed());
        }
        self.document.set(Some(doc));
    }

    /// The editor document changed
    pub fn text_changed(&self) {
        if self.shell.with_untracked(|s| s.session().is_dirty()) {
            return;
        }
        let mut shell = self.shell.get_untracked();
        shell.text_changed(&mut FloemFrontend::new(self));
        self.shell.set(shell);
    }

    /// Refusable close (Exit, Ctrl+Q, title bar close button).
    /// Returns true if the window may close.
    pub fn request_close(&self) -> bool {
        let mut shell = self.shell.get_untracked();
        let (width, height) = self.window_size.get_untracked();
        shell.set_window_size(width, height);
        let allowed = shell.request_close(&mut FloemFrontend::new(self));
        self.shell.set(shell);
        allowed
    }

    /// The system already destroyed the window
    pub fn window_closed(&self) {
        let mut shell = self.shell.get_untracked();
        let (width, height) = self.window_size.get_untracked();
        shell.set_window_size(width, height);
        shell.window_closed(&mut FloemFrontend::new(self));
        self.shell.set(shell);
    }

    pub fn is_modified(&self) -> bool {
        self.shell.with(|s| s.session().is_dirty())
    }

    /// Full path of the backing file, for the status bar
    pub fn file_path(&self) -> Option<String> {
        self.shell
            .with(|s| s.session().path().map(|p| p.display().to_string()))
    }

    pub fn recent_files(&self) -> Vec<PathBuf> {
        self.shell.with(|s| s.settings().recent_files.clone())
    }
}
