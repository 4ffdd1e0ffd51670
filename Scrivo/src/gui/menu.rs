//! File and Help menus, popped up from the title bar

use floem::menu::{Menu, MenuItem};
use scrivo_core::Command;

use crate::gui::state::EditorState;

pub fn file_menu(state: &EditorState) -> Menu {
    Menu::new("File")
        .entry(command_item(state, Command::New))
        .separator()
        .entry(command_item(state, Command::Open))
        .entry(recent_files_menu(state))
        .entry(command_item(state, Command::Save))
        .entry(command_item(state, Command::SaveAs))
        .separator()
        .entry(command_item(state, Command::Exit))
}

pub fn help_menu(state: &EditorState) -> Menu {
    Menu::new("Help").entry(command_item(state, Command::About))
}

fn command_item(state: &EditorState, command: Command) -> MenuItem {
    let state = state.clone();
    MenuItem::new(command.label()).action(move || state.dispatch(command.clone()))
}

/// "Open Recent" submenu, most recent first
fn recent_files_menu(state: &EditorState) -> Menu {
    let recent = state.recent_files();
    let mut menu = Menu::new("Open Recent");

    if recent.is_empty() {
        return menu.entry(MenuItem::new("No Recent Files").enabled(false));
    }

    for path in recent {
        let state = state.clone();
        menu = menu.entry(
            MenuItem::new(path.display().to_string())
                .action(move || state.dispatch(Command::OpenPath(path.clone()))),
        );
    }

    menu.separator()
        .entry(command_item(state, Command::ClearRecent))
}
