pub mod config;
pub mod destiny;
pub mod error;
pub mod journal;

pub use config::{resolve_data_dir, Config};
pub use destiny::DestinyEditor;
pub use error::{DestinyError, Result};
pub use journal::Journal;
