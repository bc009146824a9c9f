use mce_host::Editor;
use tracing::info;

pub const EXAMPLE_COMMAND: &str = "mceExample";

pub fn register(editor: &mut dyn Editor) {
    editor.add_command(
        EXAMPLE_COMMAND,
        Box::new(|| {
            info!("example command");
        }),
    );
}
