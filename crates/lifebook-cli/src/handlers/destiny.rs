use crate::args::DestinyCommand;
use crate::ui::Console;
use anyhow::{Context, Result};
use lifebook_runtime::{DestinyEditor, Journal};
use lifebook_store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    command: DestinyCommand,
) -> Result<()> {
    match command {
        DestinyCommand::Show => {
            let content = journal.destiny();
            console.line(&content.title);
            if !content.subtitle.is_empty() {
                console.line(&content.subtitle);
            }
            match &content.background_image {
                Some(data_url) => {
                    console.dim(&format!("background: {} bytes", data_url.len()))
                }
                None => console.dim("background: default"),
            }
        }
        DestinyCommand::Set {
            title,
            subtitle,
            background,
        } => {
            let mut editor = DestinyEditor::new(journal.destiny());

            if let Some(path) = background {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                    .context("Failed to start background loader")?;
                runtime
                    .block_on(editor.select_background_file(path))
                    .context("Background image was not applied")?;
            }

            let content = editor.commit(&title, &subtitle)?;
            journal.save_destiny(&content);
            console.success("Destiny content saved.");
        }
    }
    Ok(())
}
