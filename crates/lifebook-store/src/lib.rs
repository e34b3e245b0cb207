// NOTE: Storage Design Rationale
//
// Why a dumb string-keyed store (not a database)?
// - The journal's working set is one small JSON array plus two scalar slots
// - Origin-scoped browser storage is the reference model; the desktop analog
//   is one JSON object per store file
// - Writes can fail (quota, disk); the engine is required to keep working
//   in memory when they do, so the primitive stays fallible and synchronous
//
// Why full-list overwrite (not field patches)?
// - Every committing transition snapshots all page state machines anyway
// - A reload then reproduces exactly what was last rendered
// - Partial writes cannot leave the array half-updated
//
// Why treat corrupt blobs as empty (not fail)?
// - A journal that refuses to start is worse than one that starts blank
// - The corrupt payload is logged before being discarded

pub mod destiny;
pub mod error;
pub mod kv;
pub mod prefs;
pub mod stories;

pub use error::{KvError, Result, StoreError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use stories::StoryStore;
