//! # ScrivoCore
//!
//! Toolkit-independent core of the Scrivo text editor.
//!
//! - [`EditorShell`] owns the [`DocumentSession`] (file path + dirty flag) and
//!   runs the New / Open / Save / Save As / Exit commands.
//! - The GUI plugs in through the [`Frontend`] traits: a [`TextSurface`] that
//!   owns the text, blocking [`Dialogs`], and [`WindowChrome`] for the title and
//!   status bar.
//! - [`Settings`] persists window size and recent files as JSON.

pub mod command;
pub mod document;
pub mod error;
pub mod frontend;
pub mod session;
pub mod settings;
pub mod shell;
pub mod status;

pub use command::Command;
pub use error::{Error, PromptKind, Result};
pub use frontend::{Confirmation, Dialogs, Frontend, TextSurface, WindowChrome};
pub use session::DocumentSession;
pub use settings::Settings;
pub use shell::{BASE_TITLE, EditorShell, Flow};
pub use status::{STATUS_TIMEOUT, Status, StatusLevel, StatusSlot};
