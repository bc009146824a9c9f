use mce_host::{ActionCallback, ButtonSpec, Editor, MenuItemSpec};
use std::rc::Rc;

use crate::api::commands::EXAMPLE_COMMAND;
use crate::PLUGIN_NAME;

/// Register the toolbar button and menu item, both running the example command
pub fn register(editor: &mut dyn Editor) {
    let on_action: ActionCallback = Rc::new(|editor: &dyn Editor| {
        editor.exec_command(EXAMPLE_COMMAND);
    });

    editor.ui().add_button(
        PLUGIN_NAME,
        ButtonSpec {
            text: PLUGIN_NAME.to_string(),
            on_action: Rc::clone(&on_action),
        },
    );

    editor.ui().add_menu_item(
        PLUGIN_NAME,
        MenuItemSpec {
            text: PLUGIN_NAME.to_string(),
            on_action,
        },
    );
}
