//! Title bar: File / Help menus, window title and window buttons
//!
//! The window is undecorated. A native close button would destroy the window
//! before anyone can ask about unsaved text, so closing goes through
//! `Command::Exit` here instead.

use floem::action::{
    drag_window, minimize_window, show_context_menu, toggle_window_maximized,
};
use floem::event::{Event, EventListener};
use floem::menu::Menu;
use floem::prelude::*;
use floem::style::Style;
use scrivo_core::Command;

use crate::gui::menu;
use crate::gui::state::EditorState;

const TITLE_BAR_HEIGHT: f64 = 32.0;

fn menu_button_style(s: Style) -> Style {
    s.height_full()
        .padding_horiz(10.0)
        .items_center()
        .border(0.0)
        .border_radius(0.0)
        .background(Color::TRANSPARENT)
        .hover(|s| s.background(Color::rgb8(225, 225, 225)))
}

fn window_button_style(s: Style) -> Style {
    s.width(46.0)
        .height_full()
        .items_center()
        .justify_center()
        .border(0.0)
        .border_radius(0.0)
        .background(Color::TRANSPARENT)
        .hover(|s| s.background(Color::rgb8(225, 225, 225)))
}

pub fn editor_title_bar(state: EditorState) -> impl IntoView {
    let title = state.title;
    let state_file = state.clone();
    let state_help = state.clone();
    let state_close = state;

    h_stack((
        menu_button("File", move || menu::file_menu(&state_file)),
        menu_button("Help", move || menu::help_menu(&state_help)),
        // Drag area
        container(label(move || title.get()).style(|s| s.font_size(13.0)))
            .style(|s| s.flex_grow(1.0).height_full().items_center().justify_center())
            .on_event_stop(EventListener::PointerDown, |e| {
                if let Event::PointerDown(pointer) = e {
                    if pointer.button.is_primary() && pointer.count < 2 {
                        drag_window();
                    }
                }
            })
            .on_double_click_stop(|_| toggle_window_maximized()),
        button("—")
            .style(window_button_style)
            .action(minimize_window),
        button("☐")
            .style(window_button_style)
            .action(toggle_window_maximized),
        button("✕")
            .style(|s| {
                window_button_style(s)
                    .hover(|s| s.background(Color::rgb8(232, 17, 35)).color(Color::WHITE))
            })
            .action(move || state_close.dispatch(Command::Exit)),
    ))
    .style(|s| {
        s.width_full()
            .height(TITLE_BAR_HEIGHT)
            .items_center()
            .background(Color::rgb8(240, 240, 240))
            .border_bottom(1.0)
            .border_color(Color::rgb8(220, 220, 220))
    })
}

fn menu_button(text: &'static str, build: impl Fn() -> Menu + 'static) -> impl IntoView {
    // Rebuilt on every open so Open Recent is current
    button(text)
        .style(menu_button_style)
        .action(move || show_context_menu(build(), None))
}
