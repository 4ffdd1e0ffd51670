//! Resize borders for the undecorated window

use floem::action::drag_resize_window;
use floem::event::{Event, EventListener};
use floem::prelude::*;
use floem::style::{CursorStyle, Style};
use floem::window::ResizeDirection;

const EDGE: f64 = 4.0;

/// Wrap the window content with invisible grab areas along the borders
pub fn window_frame(content: impl IntoView + 'static) -> impl IntoView {
    stack((
        content.into_view().style(|s| s.size_full()),
        grip(ResizeDirection::North, CursorStyle::NResize, |s| {
            s.inset_top(0.0).inset_left(EDGE).inset_right(EDGE).height(EDGE)
        }),
        grip(ResizeDirection::South, CursorStyle::SResize, |s| {
            s.inset_bottom(0.0).inset_left(EDGE).inset_right(EDGE).height(EDGE)
        }),
        grip(ResizeDirection::West, CursorStyle::WResize, |s| {
            s.inset_left(0.0).inset_top(EDGE).inset_bottom(EDGE).width(EDGE)
        }),
        grip(ResizeDirection::East, CursorStyle::EResize, |s| {
            s.inset_right(0.0).inset_top(EDGE).inset_bottom(EDGE).width(EDGE)
        }),
        grip(ResizeDirection::NorthWest, CursorStyle::NwResize, |s| {
            s.inset_top(0.0).inset_left(0.0).size(EDGE, EDGE)
        }),
        grip(ResizeDirection::NorthEast, CursorStyle::NeResize, |s| {
            s.inset_top(0.0).inset_right(0.0).size(EDGE, EDGE)
        }),
        grip(ResizeDirection::SouthWest, CursorStyle::SwResize, |s| {
            s.inset_bottom(0.0).inset_left(0.0).size(EDGE, EDGE)
        }),
        grip(ResizeDirection::SouthEast, CursorStyle::SeResize, |s| {
            s.inset_bottom(0.0).inset_right(0.0).size(EDGE, EDGE)
        }),
    ))
    .style(|s| s.size_full())
}

fn grip(
    direction: ResizeDirection,
    cursor: CursorStyle,
    place: impl Fn(Style) -> Style + 'static,
) -> impl IntoView {
    empty()
        .style(move |s| place(s.absolute().z_index(10).cursor(cursor)))
        .on_event_stop(EventListener::PointerDown, move |e| {
            if let Event::PointerDown(pointer) = e {
                if pointer.button.is_primary() {
                    drag_resize_window(direction);
                }
            }
        })
}
