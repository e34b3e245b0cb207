use lifebook_runtime::Journal;
use lifebook_store::{KeyValueStore, MemoryStore};
use lifebook_types::keys::STORIES_KEY;
use lifebook_types::Story;

/// A story pinned to a known creation time, so projections are
/// deterministic regardless of the wall clock.
pub fn story_at(name: &str, millis: i64) -> Story {
    Story::new(name, millis)
}

/// An in-memory store pre-seeded with the given records, exactly as a
/// previous session would have persisted them.
pub fn seeded_store(stories: &[Story]) -> MemoryStore {
    let mut kv = MemoryStore::new();
    let payload = serde_json::to_string(stories).expect("fixture stories serialize");
    kv.set(STORIES_KEY, &payload).expect("seed store write");
    kv
}

/// A journal session opened over a store seeded with the given records.
pub fn journal_with(stories: &[Story]) -> Journal<MemoryStore> {
    Journal::open(seeded_store(stories))
}
