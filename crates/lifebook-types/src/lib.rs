pub mod destiny;
pub mod font;
pub mod keys;
pub mod sort;
pub mod story;
mod util;

pub use destiny::DestinyContent;
pub use font::FontSize;
pub use sort::SortOrder;
pub use story::{Story, StoryId};
pub use util::{now_millis, slugify};
