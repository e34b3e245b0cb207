pub mod delete;
pub mod destiny;
pub mod list;
pub mod page;
pub mod reset;
pub mod sort;

use anyhow::{bail, Result};
use lifebook_runtime::Journal;
use lifebook_store::KeyValueStore;
use lifebook_types::StoryId;

/// Resolve a user-supplied page reference: an exact id first, then a unique
/// case-insensitive name match.
pub(crate) fn resolve_page<S: KeyValueStore>(journal: &Journal<S>, raw: &str) -> Result<StoryId> {
    let as_id = StoryId::new(raw);
    if journal.page(&as_id).is_some() {
        return Ok(as_id);
    }

    let lowered = raw.to_lowercase();
    let matches: Vec<&StoryId> = journal
        .records()
        .iter()
        .filter(|s| s.name.to_lowercase() == lowered)
        .map(|s| &s.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => bail!("no page with id or name '{}'", raw),
        _ => bail!("'{}' matches more than one page; use the id", raw),
    }
}
