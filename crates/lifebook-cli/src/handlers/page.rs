use crate::args::FontCommand;
use crate::handlers::resolve_page;
use crate::ui::Console;
use anyhow::{Context, Result};
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;
use std::io::Read;
use std::path::PathBuf;

pub fn add<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    name: &str,
) -> Result<()> {
    let story = journal.create_page(name)?;
    console.success(&format!("Created \"{}\" ({})", story.name, story.id));
    Ok(())
}

pub fn show<S: KeyValueStore>(journal: &Journal<S>, console: &Console, id: &str) -> Result<()> {
    let id = resolve_page(journal, id)?;
    let page = journal.page(&id).expect("resolved page exists");
    let story = page.story();
    let controls = page.controls();

    console.line(&format!("{} {}", controls.expand_glyph(), story.name));
    console.dim(&format!(
        "id: {}  font: {}  {}",
        story.id,
        story.font_size,
        controls.expand_label()
    ));
    if story.content.is_empty() {
        console.dim("Start writing your story...");
    } else {
        console.line(&story.content);
    }
    Ok(())
}

pub fn edit<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    id: &str,
    text: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let id = resolve_page(journal, id)?;
    let content = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content from stdin")?;
            buffer
        }
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read content from {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read content from stdin")?;
            buffer
        }
    };

    journal.begin_content_edit(&id);
    journal.set_content_draft(&id, &content);
    journal.save_content(&id);
    console.success("Content saved.");
    Ok(())
}

pub fn retitle<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    id: &str,
    name: &str,
) -> Result<()> {
    let id = resolve_page(journal, id)?;
    let before = journal.page(&id).expect("resolved page exists").story().name.clone();

    journal.begin_title_edit(&id);
    journal.set_title_draft(&id, name);
    journal.commit_title(&id);

    let after = &journal.page(&id).expect("resolved page exists").story().name;
    if *after == before {
        console.warn("Name unchanged (empty or identical titles are ignored).");
    } else {
        console.success(&format!("Renamed \"{}\" to \"{}\"", before, after));
    }
    Ok(())
}

pub fn toggle<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    id: &str,
) -> Result<()> {
    let id = resolve_page(journal, id)?;
    journal.toggle_expansion(&id);
    let controls = journal.page(&id).expect("resolved page exists").controls();
    console.success(&format!(
        "\"{}\" is now {}",
        journal.page(&id).expect("resolved page exists").story().name,
        if controls.expanded { "expanded" } else { "collapsed" }
    ));
    Ok(())
}

pub fn font<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    command: FontCommand,
) -> Result<()> {
    let (raw, grow) = match &command {
        FontCommand::Grow { id } => (id.as_str(), true),
        FontCommand::Shrink { id } => (id.as_str(), false),
    };
    let id = resolve_page(journal, raw)?;

    if grow {
        journal.grow_font(&id);
    } else {
        journal.shrink_font(&id);
    }
    let story = journal.page(&id).expect("resolved page exists").story();
    console.success(&format!("\"{}\" font size: {}", story.name, story.font_size));
    Ok(())
}
