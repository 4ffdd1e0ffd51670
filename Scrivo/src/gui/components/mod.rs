//! UI components for the editor window

mod content;
mod status_bar;
mod title_bar;
mod toolbar;
mod window_frame;

pub use content::editor_content;
pub use status_bar::editor_status_bar;
pub use title_bar::editor_title_bar;
pub use toolbar::editor_toolbar;
pub use window_frame::window_frame;
