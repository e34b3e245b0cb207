use std::fmt;

/// Result type for lifebook-runtime operations
pub type Result<T> = std::result::Result<T, DestinyError>;

/// Error types for the destiny editor collaborator.
#[derive(Debug)]
pub enum DestinyError {
    /// A destiny title was empty (or whitespace) at commit time.
    EmptyTitle,

    /// The selected background image could not be read.
    ImageRead(std::io::Error),

    /// The background load task was torn down before completing.
    TaskFailed(String),
}

impl fmt::Display for DestinyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinyError::EmptyTitle => write!(f, "Title cannot be empty"),
            DestinyError::ImageRead(err) => write!(f, "Failed to load image: {}", err),
            DestinyError::TaskFailed(msg) => write!(f, "Image load task failed: {}", msg),
        }
    }
}

impl std::error::Error for DestinyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DestinyError::ImageRead(err) => Some(err),
            DestinyError::EmptyTitle | DestinyError::TaskFailed(_) => None,
        }
    }
}

impl From<std::io::Error> for DestinyError {
    fn from(err: std::io::Error) -> Self {
        DestinyError::ImageRead(err)
    }
}
