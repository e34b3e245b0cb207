use crate::font::FontSize;
use crate::util::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a story page.
///
/// Generated as `story-<slug>-<unixMillis>` for compatibility with records
/// written by earlier versions, which embedded the creation time as the
/// trailing token. New code sorts on [`Story::created_at`]; the embedded
/// timestamp is only consulted when loading a legacy record that lacks the
/// explicit field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Build a fresh id from a page name and a creation time in unix millis.
    pub fn generate(name: &str, millis: i64) -> Self {
        Self(format!("story-{}-{}", slugify(name), millis))
    }

    /// Wrap an existing raw id (e.g. read back from the store).
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the trailing `-`-delimited token as a unix-millis timestamp.
    ///
    /// Returns `None` for malformed ids; callers decide the fallback (the
    /// store sinks those records to the oldest end by treating them as 0).
    pub fn timestamp_token(&self) -> Option<i64> {
        self.0.rsplit('-').next()?.parse().ok()
    }
}

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoryId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// A single journal page.
///
/// Serialized camelCase to match the JSON array the store has always held.
/// Mutations overwrite the whole record inside the store; there is no
/// field-level patching.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: StoryId,
    /// Display title; non-empty once committed.
    pub name: String,
    /// Rich-text body serialized as markup; may be empty.
    pub content: String,
    pub font_size: FontSize,
    /// Persisted UI state so the view survives a reload.
    pub is_expanded: bool,
    /// Creation time in unix millis; the sole sort key.
    pub created_at: i64,
}

impl Story {
    /// A freshly created page: empty content, default font, collapsed.
    pub fn new(name: impl Into<String>, created_at: i64) -> Self {
        let name = name.into();
        Self {
            id: StoryId::generate(&name, created_at),
            name,
            content: String::new(),
            font_size: FontSize::default(),
            is_expanded: false,
            created_at,
        }
    }
}

// Legacy records predate the explicit createdAt field; recover it from the
// id's trailing token, or 0 when that is malformed, so those records sort
// as oldest under every order.
impl<'de> Deserialize<'de> for Story {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            id: StoryId,
            name: String,
            #[serde(default)]
            content: String,
            #[serde(default)]
            font_size: FontSize,
            #[serde(default)]
            is_expanded: bool,
            #[serde(default)]
            created_at: Option<i64>,
        }

        let wire = Wire::deserialize(deserializer)?;
        let created_at = wire
            .created_at
            .or_else(|| wire.id.timestamp_token())
            .unwrap_or(0);

        Ok(Story {
            id: wire.id,
            name: wire.name,
            content: wire.content,
            font_size: wire.font_size,
            is_expanded: wire.is_expanded,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_embeds_slug_and_timestamp() {
        let story = Story::new("My Biggest Dream", 1_700_000_000_000);
        assert_eq!(story.id.as_str(), "story-my-biggest-dream-1700000000000");
        assert_eq!(story.id.timestamp_token(), Some(1_700_000_000_000));
    }

    #[test]
    fn new_page_has_empty_content_and_defaults() {
        let story = Story::new("Trip", 1000);
        assert_eq!(story.content, "");
        assert_eq!(story.font_size, FontSize::default());
        assert!(!story.is_expanded);
        assert_eq!(story.created_at, 1000);
    }

    #[test]
    fn legacy_record_recovers_created_at_from_id() {
        let json = r#"{"id":"story-trip-12345","name":"Trip","content":"","fontSize":"15px","isExpanded":true}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_at, 12345);
        assert!(story.is_expanded);
    }

    #[test]
    fn malformed_legacy_id_sinks_to_zero() {
        let json = r#"{"id":"not-a-real-id","name":"Odd"}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_at, 0);
    }

    #[test]
    fn explicit_created_at_wins_over_id_token() {
        let json = r#"{"id":"story-trip-111","name":"Trip","createdAt":999}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.created_at, 999);
    }
}
