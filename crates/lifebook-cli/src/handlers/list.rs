use crate::ui::Console;
use anyhow::Result;
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    search: Option<String>,
) -> Result<()> {
    if let Some(term) = search {
        journal.set_search_term(term);
    }

    let pages = journal.visible_pages();
    if pages.is_empty() {
        if journal.records().is_empty() {
            console.dim("No pages yet. Create one with `lifebook add <name>`.");
        } else {
            console.dim("No pages match the search term.");
        }
        return Ok(());
    }

    console.dim(&format!(
        "{} page(s), {}",
        pages.len(),
        journal.sort_order()
    ));
    for page in pages {
        let story = page.story();
        let controls = page.controls();
        console.line(&format!(
            "{} {}  [{}]  ({})",
            controls.expand_glyph(),
            story.name,
            story.id,
            story.font_size
        ));
    }
    Ok(())
}
