//! The editor shell: command handlers over one document session
//!
//! Every handler runs to completion on the UI thread. Handlers return a
//! [`Status`] on success; failures are turned into an error status plus a
//! modal error dialog by [`EditorShell::execute`].

use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::document::{read_text, write_text};
use crate::error::{Error, PromptKind, Result};
use crate::frontend::{Confirmation, Dialogs, Frontend, WindowChrome};
use crate::session::DocumentSession;
use crate::settings::Settings;
use crate::status::Status;

/// Application name shown in the title bar
pub const BASE_TITLE: &str = "Scrivo";

/// What the caller should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct EditorShell {
    base_title: String,
    session: DocumentSession,
    settings: Settings,
    /// Where settings are written after changes; `None` keeps them in memory
    settings_path: Option<PathBuf>,
}

impl Default for EditorShell {
    fn default() -> Self {
        Self::new(BASE_TITLE)
    }
}

impl EditorShell {
    pub fn new(base_title: impl Into<String>) -> Self {
        Self {
            base_title: base_title.into(),
            session: DocumentSession::new(),
            settings: Settings::default(),
            settings_path: None,
        }
    }

    /// Use `settings`, persisting changes to `path` when given
    pub fn with_settings(mut self, settings: Settings, path: Option<PathBuf>) -> Self {
        self.settings = settings;
        self.settings_path = path;
        self
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn base_title(&self) -> &str {
        &self.base_title
    }

    pub fn window_title(&self) -> String {
        self.session.window_title(&self.base_title)
    }

    /// Run one command to completion.
    pub fn execute(&mut self, command: Command, ui: &mut impl Frontend) -> Flow {
        tracing::debug!("Executing {:?}", command);

        if command.discards_buffer() && !self.confirm_discard(ui) {
            tracing::debug!("{} aborted, unsaved changes kept", command.label());
            return Flow::Continue;
        }

        let result = match command {
            Command::New => self.new_document(ui),
            Command::Open => self.open(ui),
            Command::OpenPath(path) => self.open_path(path, ui),
            Command::Save => self.save(ui),
            Command::SaveAs => self.save_as(ui),
            Command::ClearRecent => {
                self.settings.clear_recent_files();
                self.persist_settings();
                Ok(Status::info("Recent files cleared"))
            }
            Command::About => {
                ui.show_info("About", &self.about_message());
                return Flow::Continue;
            }
            Command::Exit => {
                return if self.request_close(ui) {
                    Flow::Quit
                } else {
                    Flow::Continue
                };
            }
        };

        match result {
            Ok(status) => ui.show_status(&status),
            Err(e) => report_error(&e, ui),
        }
        Flow::Continue
    }

    /// Content-change notification from the text surface
    pub fn text_changed(&mut self, ui: &mut impl WindowChrome) {
        if self.session.mark_modified() {
            tracing::debug!("Document modified");
            ui.set_title(&self.window_title());
        }
    }

    /// Close request that can still be refused (Exit, Ctrl+Q, title bar
    /// close button). Returns true if the window may close.
    pub fn request_close(&mut self, ui: &mut impl Dialogs) -> bool {
        let allowed = self.confirm_discard(ui);
        if allowed {
            self.persist_settings();
        } else {
            tracing::debug!("Close cancelled, unsaved changes kept");
        }
        allowed
    }

    /// The window was closed by the system (window manager, Alt+F4) and can
    /// no longer be kept open. Unsaved text gets one chance to be saved;
    /// settings are persisted either way.
    pub fn window_closed(&mut self, ui: &mut impl Frontend) {
        if self.session.is_dirty() {
            tracing::warn!("Window closed with unsaved changes");
            if ui.offer_save_before_exit() {
                self.execute(Command::Save, ui);
            }
        }
        self.persist_settings();
    }

    /// Record the window size so the next start uses it
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.settings.window.width = width;
        self.settings.window.height = height;
    }

    fn confirm_discard(&self, ui: &mut impl Dialogs) -> bool {
        !self.session.is_dirty() || ui.confirm_discard() == Confirmation::Discard
    }

    fn new_document(&mut self, ui: &mut impl Frontend) -> Result<Status> {
        ui.clear();
        self.session.reset();
        ui.set_title(&self.window_title());
        tracing::info!("New document");
        Ok(Status::info("New file created"))
    }

    fn open(&mut self, ui: &mut impl Frontend) -> Result<Status> {
        let start_dir = self.start_directory();
        let path = ui
            .choose_open_path(start_dir.as_deref())
            .ok_or(Error::SelectionCancelled(PromptKind::Open))?;
        self.open_path(path, ui)
    }

    fn open_path(&mut self, path: PathBuf, ui: &mut impl Frontend) -> Result<Status> {
        let text = read_text(&path)?;
        let len = text.len();
        ui.replace_text(text);
        self.remember(&path);
        self.session.mark_clean(path);
        ui.set_title(&self.window_title());
        tracing::info!("Opened {} ({} bytes)", self.display_path(), len);
        Ok(Status::info("File opened"))
    }

    fn save(&mut self, ui: &mut impl Frontend) -> Result<Status> {
        if !self.session.is_dirty() {
            return Ok(Status::info("Text was not modified, no need to save"));
        }
        let target = match self.session.path() {
            Some(path) => path.to_path_buf(),
            None => self.choose_destination(PromptKind::Save, ui)?,
        };
        self.write_to(target, ui)
    }

    fn save_as(&mut self, ui: &mut impl Frontend) -> Result<Status> {
        let target = self.choose_destination(PromptKind::SaveAs, ui)?;
        self.write_to(target, ui)
    }

    fn choose_destination(&self, kind: PromptKind, ui: &mut impl Dialogs) -> Result<PathBuf> {
        let start_dir = self.start_directory();
        ui.choose_save_path(start_dir.as_deref(), self.session.path())
            .ok_or(Error::SelectionCancelled(kind))
    }

    fn write_to(&mut self, path: PathBuf, ui: &mut impl Frontend) -> Result<Status> {
        let text = ui.text();
        write_text(&path, &text)?;
        self.remember(&path);
        self.session.mark_clean(path);
        ui.set_title(&self.window_title());
        tracing::info!("Saved {} ({} bytes)", self.display_path(), text.len());
        Ok(Status::info("File saved"))
    }

    fn start_directory(&self) -> Option<PathBuf> {
        self.session
            .directory()
            .filter(|d| !d.as_os_str().is_empty())
            .or(self.settings.last_directory.as_deref())
            .map(Path::to_path_buf)
    }

    fn remember(&mut self, path: &Path) {
        self.settings.add_recent_file(path);
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                tracing::warn!("Failed to save settings to {}: {}", path.display(), e);
            }
        }
    }

    fn display_path(&self) -> String {
        self.session
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    fn about_message(&self) -> String {
        format!(
            "{} {}\n\nA small plain-text editor.",
            self.base_title,
            env!("CARGO_PKG_VERSION")
        )
    }
}

/// Status bar message plus blocking dialog
fn report_error(error: &Error, ui: &mut impl Frontend) {
    tracing::warn!("{}: {}", error.dialog_title(), error);
    ui.show_status(&Status::error(error.status_text()));
    ui.show_error(error.dialog_title(), &error.to_string());
}
