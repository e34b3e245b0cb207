use crate::ui::Console;
use anyhow::Result;
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;

const RESET_PROMPT: &str =
    "Are you sure you want to reset all settings and data? This will delete all your stories and custom content.";

pub fn run<S: KeyValueStore>(journal: &mut Journal<S>, console: &Console, yes: bool) -> Result<()> {
    let confirmed = yes || console.confirm(RESET_PROMPT).unwrap_or(false);
    if !confirmed {
        console.line("Cancelled.");
        return Ok(());
    }

    journal.reset();
    console.success("All data removed.");
    Ok(())
}
