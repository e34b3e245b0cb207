use crate::error::{Result, StoreError};
use crate::kv::KeyValueStore;
use lifebook_types::keys::STORIES_KEY;
use lifebook_types::{now_millis, Story, StoryId};

/// Typed CRUD over the persistence collaborator; owns the canonical list of
/// story records for the session.
///
/// The backend is passed per call rather than owned so a single key-value
/// store can serve the record list, the preference slot, and the destiny
/// record at once.
#[derive(Debug, Default)]
pub struct StoryStore {
    records: Vec<Story>,
}

impl StoryStore {
    /// Load the record list from the store. A missing key is an empty list;
    /// a corrupt blob is logged and treated as empty, never fatal.
    pub fn load(kv: &impl KeyValueStore) -> Self {
        let records = match kv.get(STORIES_KEY) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<Story>>(&raw) {
                Ok(records) => records,
                Err(err) => {
                    tracing::error!(%err, "corrupt story list in store, starting empty");
                    Vec::new()
                }
            },
        };
        Self { records }
    }

    /// The canonical record list, in storage order.
    pub fn list(&self) -> &[Story] {
        &self.records
    }

    pub fn get(&self, id: &StoryId) -> Option<&Story> {
        self.records.iter().find(|s| &s.id == id)
    }

    /// Create a page from a user-submitted name.
    ///
    /// The name is trimmed and rejected if empty before any mutation. A
    /// failing persistence write does not fail the call: the in-memory
    /// creation stands for the session and a warning is logged.
    pub fn create(&mut self, kv: &mut impl KeyValueStore, name: &str) -> Result<Story> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let story = Story::new(name, now_millis());
        self.records.push(story.clone());
        self.persist(kv);
        Ok(story)
    }

    /// Overwrite the whole record list. This is the persist path for every
    /// per-page committing mutation: the caller snapshots all page state and
    /// hands the full list over.
    pub fn replace_all(&mut self, kv: &mut impl KeyValueStore, records: Vec<Story>) {
        self.records = records;
        self.persist(kv);
    }

    /// Remove by id; silently no-ops when the id is absent (idempotent).
    pub fn delete(&mut self, kv: &mut impl KeyValueStore, id: &StoryId) {
        let before = self.records.len();
        self.records.retain(|s| &s.id != id);
        if self.records.len() != before {
            self.persist(kv);
        }
    }

    fn persist(&self, kv: &mut impl KeyValueStore) {
        let payload = match serde_json::to_string(&self.records) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::error!(%err, "failed to encode story list, store not updated");
                return;
            }
        };
        if let Err(err) = kv.set(STORIES_KEY, &payload) {
            // Accepted degradation: the session keeps the change in memory,
            // but it may be lost on reload.
            tracing::warn!(%err, "failed to persist story list");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn create_round_trips_through_the_store() {
        let mut kv = MemoryStore::new();
        let mut store = StoryStore::load(&kv);
        let story = store.create(&mut kv, "  Trip  ").unwrap();
        assert_eq!(story.name, "Trip");

        let reloaded = StoryStore::load(&kv);
        let records = reloaded.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Trip");
        assert_eq!(records[0].content, "");
        assert!(!records[0].is_expanded);
        assert_eq!(records[0].font_size, lifebook_types::FontSize::default());
    }

    #[test]
    fn empty_name_is_rejected_before_mutation() {
        let mut kv = MemoryStore::new();
        let mut store = StoryStore::load(&kv);
        assert!(matches!(
            store.create(&mut kv, "   "),
            Err(StoreError::EmptyName)
        ));
        assert!(store.list().is_empty());
        assert_eq!(kv.get(lifebook_types::keys::STORIES_KEY), None);
    }

    #[test]
    fn deleting_a_missing_id_leaves_records_unchanged() {
        let mut kv = MemoryStore::new();
        let mut store = StoryStore::load(&kv);
        store.create(&mut kv, "Trip").unwrap();

        store.delete(&mut kv, &StoryId::new("story-nope-1"));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn delete_removes_record_and_persists() {
        let mut kv = MemoryStore::new();
        let mut store = StoryStore::load(&kv);
        let story = store.create(&mut kv, "Trip").unwrap();

        store.delete(&mut kv, &story.id);
        assert!(store.list().is_empty());
        assert!(StoryStore::load(&kv).list().is_empty());
    }

    #[test]
    fn record_with_a_fractional_font_token_still_loads() {
        // Legacy stores hold computed-style tokens verbatim; one odd token
        // must not take the rest of the list down with it.
        let mut kv = MemoryStore::new();
        kv.set(
            STORIES_KEY,
            r#"[{"id":"story-trip-1000","name":"Trip","content":"","fontSize":"15.5px","isExpanded":false},
                {"id":"story-work-2000","name":"Work","content":"","fontSize":"15px","isExpanded":false}]"#,
        )
        .unwrap();

        let store = StoryStore::load(&kv);
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0].font_size.px(), 16);
    }

    #[test]
    fn corrupt_blob_loads_as_empty() {
        let mut kv = MemoryStore::new();
        kv.set(STORIES_KEY, "][ not json").unwrap();
        let store = StoryStore::load(&kv);
        assert!(store.list().is_empty());
    }

    #[test]
    fn quota_failure_keeps_the_in_memory_record() {
        // Too small for any story payload, so every persist fails.
        let mut kv = MemoryStore::with_capacity_bytes(4);
        let mut store = StoryStore::load(&kv);
        let story = store.create(&mut kv, "Trip").unwrap();

        assert_eq!(store.get(&story.id).unwrap().name, "Trip");
        // Nothing reached the backing store.
        assert_eq!(kv.get(STORIES_KEY), None);
    }
}
