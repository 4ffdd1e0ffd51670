//! Toolbar with the most common file commands

use floem::prelude::*;
use scrivo_core::Command;

use crate::gui::state::EditorState;

/// Common toolbar button style for consistent height
fn toolbar_button_style(s: floem::style::Style) -> floem::style::Style {
    s.min_height(0.0)
        .height(22.0)
        .max_height(22.0)
        .padding_horiz(6.0)
        .padding_vert(2.0)
        .items_center()
        .justify_center()
}

pub fn editor_toolbar(state: EditorState) -> impl IntoView {
    let state_new = state.clone();
    let state_open = state.clone();
    let state_save = state.clone();

    h_stack((
        button("📄 New")
            .style(toolbar_button_style)
            .action(move || state_new.dispatch(Command::New)),
        separator(),
        button("📂 Open")
            .style(toolbar_button_style)
            .action(move || state_open.dispatch(Command::Open)),
        button("💾 Save")
            .style(toolbar_button_style)
            .action(move || state_save.dispatch(Command::Save)),
        empty().style(|s| s.flex_grow(1.0)),
    ))
    .style(|s| {
        s.width_full()
            .height(40.0)
            .padding(8.0)
            .gap(8.0)
            .items_center()
            .background(Color::rgb8(245, 245, 245))
            .border_bottom(1.0)
            .border_color(Color::rgb8(220, 220, 220))
    })
}

fn separator() -> impl IntoView {
    empty().style(|s| {
        s.width(1.0)
            .height(22.0)
            .background(Color::rgb8(200, 200, 200))
            .margin_horiz(4.0)
    })
}
