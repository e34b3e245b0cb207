//! Load/save for the single destiny record.

use crate::kv::KeyValueStore;
use lifebook_types::keys::DESTINY_KEY;
use lifebook_types::DestinyContent;

/// Read the persisted destiny record, if any. Corruption is logged and
/// reported as absent so callers fall back to the defaults.
pub fn load(kv: &impl KeyValueStore) -> Option<DestinyContent> {
    let raw = kv.get(DESTINY_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(content) => Some(content),
        Err(err) => {
            tracing::error!(%err, "corrupt destiny record in store, using defaults");
            None
        }
    }
}

/// Persist the destiny record; write failure is logged, not fatal.
pub fn save(kv: &mut impl KeyValueStore, content: &DestinyContent) {
    let payload = match serde_json::to_string(content) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(%err, "failed to encode destiny record");
            return;
        }
    };
    if let Err(err) = kv.set(DESTINY_KEY, &payload) {
        tracing::warn!(%err, "failed to persist destiny record");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    #[test]
    fn round_trips_the_record() {
        let mut kv = MemoryStore::new();
        assert!(load(&kv).is_none());

        let content = DestinyContent {
            title: "Why are we here?".to_string(),
            subtitle: "A question".to_string(),
            background_image: None,
        };
        save(&mut kv, &content);
        assert_eq!(load(&kv).unwrap(), content);
    }

    #[test]
    fn corrupt_record_reads_as_absent() {
        let mut kv = MemoryStore::new();
        kv.set(DESTINY_KEY, "oops").unwrap();
        assert!(load(&kv).is_none());
    }
}
