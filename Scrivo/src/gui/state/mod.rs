//! Application state for the Scrivo window

mod editor;
mod frontend;

pub use editor::EditorState;
pub use frontend::FloemFrontend;
