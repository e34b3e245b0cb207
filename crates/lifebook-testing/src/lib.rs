//! Testing infrastructure for lifebook integration tests.
//!
//! Provides declarative fixtures: stories pinned to known timestamps,
//! pre-seeded in-memory stores, and ready-to-drive journal sessions.

pub mod fixtures;

pub use fixtures::{journal_with, seeded_store, story_at};
