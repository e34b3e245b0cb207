//! The preference slot, kept outside the story record store.

use crate::kv::KeyValueStore;
use lifebook_types::keys::SORT_ORDER_KEY;
use lifebook_types::SortOrder;

/// Read the persisted sort order. Missing or unrecognized values fall back
/// to the default rather than erroring.
pub fn sort_order(kv: &impl KeyValueStore) -> SortOrder {
    match kv.get(SORT_ORDER_KEY) {
        None => SortOrder::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(%raw, "unrecognized sort order in store, using default");
            SortOrder::default()
        }),
    }
}

/// Persist the sort order preference. Write failure is the usual accepted
/// degradation: logged, session keeps the new order.
pub fn set_sort_order(kv: &mut impl KeyValueStore, order: SortOrder) {
    if let Err(err) = kv.set(SORT_ORDER_KEY, order.as_str()) {
        tracing::warn!(%err, "failed to persist sort order");
    }
}
