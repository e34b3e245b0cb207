use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the lifebook data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. LIFEBOOK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.lifebook (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> PathBuf {
    if let Some(path) = explicit_path {
        return expand_tilde(path);
    }

    if let Ok(env_path) = std::env::var("LIFEBOOK_PATH") {
        return expand_tilde(&env_path);
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("lifebook");
    }

    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".lifebook");
    }

    // Last resort: relative to the working directory.
    PathBuf::from(".lifebook")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Optional `config.toml` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Override for the store file location; defaults to `store.json`
    /// inside the data directory.
    #[serde(default)]
    pub store_file: Option<PathBuf>,
}

impl Config {
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "invalid config file, using defaults");
                Self::default()
            }
        }
    }

    /// The store file this configuration points at, given the data dir.
    pub fn store_file(&self, data_dir: &Path) -> PathBuf {
        self.store_file
            .clone()
            .unwrap_or_else(|| data_dir.join("store.json"))
    }
}
