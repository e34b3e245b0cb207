use crate::error::{DestinyError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use lifebook_types::DestinyContent;
use std::path::{Path, PathBuf};

/// Edit session for the single destiny record.
///
/// Holds the last persisted record plus the transient background selection
/// driving the live preview. The only asynchronous boundary in the system
/// lives here: reading the selected image file. A failed read reverts the
/// transient selection to the last persisted value and surfaces the error;
/// it never touches the persisted record.
#[derive(Debug, Clone)]
pub struct DestinyEditor {
    persisted: DestinyContent,
    selected_background: Option<String>,
}

impl DestinyEditor {
    pub fn new(persisted: DestinyContent) -> Self {
        let selected_background = persisted.background_image.clone();
        Self {
            persisted,
            selected_background,
        }
    }

    pub fn persisted(&self) -> &DestinyContent {
        &self.persisted
    }

    /// The background the preview should currently show.
    pub fn selected_background(&self) -> Option<&str> {
        self.selected_background.as_deref()
    }

    /// Read an image file and make it the transient selection, encoded as a
    /// data URL. On failure the selection reverts to the last persisted
    /// background and the error is returned for user display.
    pub async fn select_background_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        match read_as_data_url(path).await {
            Ok(data_url) => {
                self.selected_background = Some(data_url);
                Ok(())
            }
            Err(err) => {
                tracing::error!(%err, "failed to read destiny background image");
                self.selected_background = self.persisted.background_image.clone();
                Err(err)
            }
        }
    }

    /// Drop any un-committed background selection.
    pub fn cancel(&mut self) {
        self.selected_background = self.persisted.background_image.clone();
    }

    /// Validate and produce the record to persist. The title is trimmed and
    /// must be non-empty; nothing is mutated on rejection.
    pub fn commit(&mut self, title: &str, subtitle: &str) -> Result<DestinyContent> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DestinyError::EmptyTitle);
        }
        let content = DestinyContent {
            title: title.to_string(),
            subtitle: subtitle.trim().to_string(),
            background_image: self.selected_background.clone(),
        };
        self.persisted = content.clone();
        Ok(content)
    }
}

/// Read a file's bytes off the event loop and encode them as a data URL.
async fn read_as_data_url(path: PathBuf) -> Result<String> {
    let mime = mime_for(&path);
    let bytes = tokio::task::spawn_blocking(move || std::fs::read(path))
        .await
        .map_err(|err| DestinyError::TaskFailed(err.to_string()))??;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
