//! Scrivo GUI
//!
//! A single-window plain-text editor built with Floem:
//! - Title bar with File (New, Open, Open Recent, Save, Save As, Exit) and
//!   Help > About menus
//! - Toolbar duplicating New / Open / Save
//! - Status bar with transient command feedback and the modified indicator
//! - Discard-changes confirmation before New, Open and closing the window

mod components;
mod menu;
pub mod state;
pub mod utils;

use std::path::PathBuf;
use std::time::Duration;

use floem::Application;
use floem::action::exec_after;
use floem::event::{Event, EventListener};
use floem::keyboard::{Key, Modifiers};
use floem::prelude::*;
use floem::window::WindowConfig;
use scrivo_core::settings::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use scrivo_core::{BASE_TITLE, Command, EditorShell, Settings};

use components::{
    editor_content, editor_status_bar, editor_title_bar, editor_toolbar, window_frame,
};
use state::EditorState;

/// Run the Scrivo GUI application, optionally opening `initial_file`
pub fn run_app(initial_file: Option<PathBuf>) {
    let settings = Settings::load();
    let size = settings.window.size();
    let shell = EditorShell::new(BASE_TITLE).with_settings(settings, Settings::default_path());

    Application::new()
        .window(
            move |_| app_view(shell, initial_file),
            Some(
                WindowConfig::default()
                    .size(size)
                    .min_size((MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
                    .title(BASE_TITLE)
                    // Our own title bar; the native close button can't be refused
                    .undecorated(true),
            ),
        )
        .run();
}

/// Terminate the process.
///
/// Using process::exit because quit_app() alone doesn't terminate the
/// process on macOS.
pub(crate) fn quit() -> ! {
    tracing::info!("Exiting");
    std::process::exit(0)
}

fn app_view(shell: EditorShell, initial_file: Option<PathBuf>) -> impl IntoView {
    let state = EditorState::new(shell);
    let title = state.title;
    let window_size = state.window_size;

    let state_for_close = state.clone();
    let state_for_keyboard = state.clone();

    if let Some(path) = initial_file {
        let state_for_open = state.clone();
        // Defer until the window exists so error dialogs have a parent
        exec_after(Duration::from_millis(50), move |_| {
            state_for_open.dispatch(Command::OpenPath(path));
        });
    }

    window_frame(
        v_stack((
            editor_title_bar(state.clone()),
            editor_toolbar(state.clone()),
            editor_content(state.clone()),
            editor_status_bar(state),
        ))
        .style(|s| s.width_full().height_full()),
    )
    .window_title(move || title.get())
    .on_event_cont(EventListener::WindowResized, move |e| {
        if let Event::WindowResized(size) = e {
            window_size.set((size.width, size.height));
        }
    })
    .on_event_stop(EventListener::WindowClosed, move |_| {
        // Only reached when the system closed the window (Alt+F4, window
        // manager). floem has already destroyed it, so this can't be refused.
        state_for_close.window_closed();
        quit();
    })
    .on_event_cont(EventListener::KeyDown, move |e| {
        // Shortcuts when the editor itself doesn't have focus
        if let Event::KeyDown(key_event) = e {
            let is_cmd_or_ctrl = key_event.modifiers.contains(Modifiers::META)
                || key_event.modifiers.contains(Modifiers::CONTROL);
            if !is_cmd_or_ctrl {
                return;
            }
            if let Key::Character(c) = &key_event.key.logical_key {
                let shift = key_event.modifiers.contains(Modifiers::SHIFT);
                if let Some(command) = Command::from_shortcut(c.as_str(), shift) {
                    state_for_keyboard.dispatch(command);
                }
            }
        }
    })
}
