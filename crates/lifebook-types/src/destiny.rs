use serde::{Deserialize, Serialize};

/// The single "Destiny" record: a headline, a subtitle, and an optional
/// background image stored as a data URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinyContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub background_image: Option<String>,
}

impl Default for DestinyContent {
    fn default() -> Self {
        Self {
            title: "What is the meaning of life?".to_string(),
            subtitle: String::new(),
            background_image: None,
        }
    }
}
