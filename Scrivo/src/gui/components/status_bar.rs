//! Status bar: transient command status on the left, file info on the right

use floem::prelude::*;
use scrivo_core::StatusLevel;

use crate::gui::state::EditorState;

pub fn editor_status_bar(state: EditorState) -> impl IntoView {
    let status = state.status;
    let state_path = state.clone();
    let state_modified = state;

    h_stack((
        // Last command outcome
        label(move || {
            status.with(|slot| slot.current().map(|s| s.text.clone()).unwrap_or_default())
        })
        .style(move |s| {
            let color = match status.with(|slot| slot.current().map(|s| s.level)) {
                Some(StatusLevel::Error) => Color::rgb8(211, 47, 47),
                _ => Color::rgb8(76, 175, 80),
            };
            s.color(color).font_size(12.0)
        }),
        empty().style(|s| s.flex_grow(1.0)),
        // File path
        label(move || {
            state_path
                .file_path()
                .unwrap_or_else(|| "Untitled".to_string())
        })
        .style(|s| {
            s.color(Color::rgb8(100, 100, 100))
                .font_size(12.0)
                .text_ellipsis()
                .max_width(500.0)
        }),
        // Modified indicator
        label(move || {
            if state_modified.is_modified() {
                "● Modified"
            } else {
                ""
            }
            .to_string()
        })
        .style(|s| {
            s.color(Color::rgb8(255, 152, 0))
                .font_size(12.0)
                .margin_left(12.0)
        }),
    ))
    .style(|s| {
        s.width_full()
            .height(28.0)
            .padding_horiz(12.0)
            .items_center()
            .background(Color::rgb8(248, 248, 248))
            .border_top(1.0)
            .border_color(Color::rgb8(220, 220, 220))
    })
}
