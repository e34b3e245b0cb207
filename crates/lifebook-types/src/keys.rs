//! Keys used in the backing key-value store.
//!
//! One key holds the serialized story array, one the sort-order preference,
//! and one the destiny record. Everything else in the store is foreign data
//! and must be left untouched.

/// Serialized `Vec<Story>` (JSON array).
pub const STORIES_KEY: &str = "lifebook.stories";

/// Sort-order preference string (`"newest-first"` / `"oldest-first"`).
pub const SORT_ORDER_KEY: &str = "lifebook.sort-order";

/// Serialized `DestinyContent` record.
pub const DESTINY_KEY: &str = "lifebook.destiny";
