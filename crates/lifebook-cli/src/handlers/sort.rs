use crate::args::SortCommand;
use crate::ui::Console;
use anyhow::Result;
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;

pub fn run<S: KeyValueStore>(
    journal: &mut Journal<S>,
    console: &Console,
    command: SortCommand,
) -> Result<()> {
    match command {
        SortCommand::Toggle => {
            let order = journal.toggle_sort_order();
            console.success(&format!("Sort order: {}", order));
        }
        SortCommand::Show => {
            console.line(&journal.sort_order().to_string());
        }
    }
    Ok(())
}
