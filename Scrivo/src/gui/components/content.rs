//! Main editing surface

use std::time::Duration;

use floem::action::exec_after;
use floem::keyboard::{Key, Modifiers};
use floem::prelude::*;
use floem::views::editor::Editor;
use floem::views::editor::command::CommandExecuted;
use floem::views::editor::keypress::{default_key_handler, key::KeyInput, press::KeyPress};
use floem::views::text_editor_keys;
use scrivo_core::Command;

use crate::gui::state::EditorState;

pub fn editor_content(state: EditorState) -> impl IntoView {
    let generation = state.generation;
    let content = state.content;

    // The editor owns its document; it is rebuilt only when the whole buffer is
    // replaced (New, Open)
    dyn_container(
        move || generation.get(),
        move |_| {
            // Use get_untracked to avoid creating a reactive subscription
            let text = content.get_untracked();
            let state_keys = state.clone();

            // Custom key handler that intercepts shortcuts before the default handler
            let key_handler =
                move |editor_sig: RwSignal<Editor>, keypress: &KeyPress, mods: Modifiers| {
                    if mods.meta() || mods.control() {
                        if let KeyInput::Keyboard(Key::Character(c), _) = &keypress.key {
                            if let Some(command) = Command::from_shortcut(c.as_str(), mods.shift())
                            {
                                // Open dialogs after the key event has been handled
                                let state_cmd = state_keys.clone();
                                exec_after(Duration::from_millis(50), move |_| {
                                    state_cmd.dispatch(command);
                                });
                                return CommandExecuted::Yes;
                            }
                        }
                    }

                    default_key_handler(editor_sig)(keypress, mods)
                };

            let editor = text_editor_keys(text, key_handler)
                .editor_style(|s| s.hide_gutter(true))
                .placeholder("Start typing...")
                .style(|s| s.size_full().padding_left(12.0).flex_grow(1.0));

            state.attach_document(editor.doc());

            editor.into_any()
        },
    )
    .style(|s| s.size_full().flex_grow(1.0))
}
