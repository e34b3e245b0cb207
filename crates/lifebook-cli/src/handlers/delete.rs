use crate::handlers::resolve_page;
use crate::ui::Console;
use anyhow::Result;
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    id: &str,
    yes: bool,
) -> Result<()> {
    let id = resolve_page(journal, id)?;
    let name = journal.page(&id).expect("resolved page exists").story().name.clone();

    if yes {
        journal.delete_directly(&id);
        console.success(&format!("Deleted \"{}\"", name));
        return Ok(());
    }

    let prompt = journal
        .request_delete(&id)
        .expect("resolved page exists")
        .prompt();

    match console.confirm(&prompt) {
        Some(true) => {
            journal.confirm_delete();
            console.success(&format!("Deleted \"{}\"", name));
        }
        Some(false) => {
            journal.cancel_delete();
            console.line("Cancelled.");
        }
        None => {
            // No confirmation surface available: proceed directly.
            journal.cancel_delete();
            journal.delete_directly(&id);
            console.success(&format!("Deleted \"{}\"", name));
        }
    }
    Ok(())
}
