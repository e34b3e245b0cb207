use std::fmt;

/// Result type for lifebook-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error from the raw key-value primitive.
#[derive(Debug)]
pub enum KvError {
    /// Write rejected because the store is out of capacity (quota).
    CapacityExceeded { key: String },

    /// Underlying IO failed.
    Io(std::io::Error),
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvError::CapacityExceeded { key } => {
                write!(f, "Store capacity exceeded while writing key '{}'", key)
            }
            KvError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for KvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KvError::Io(err) => Some(err),
            KvError::CapacityExceeded { .. } => None,
        }
    }
}

impl From<std::io::Error> for KvError {
    fn from(err: std::io::Error) -> Self {
        KvError::Io(err)
    }
}

/// Error types that can occur in the typed store layer
#[derive(Debug)]
pub enum StoreError {
    /// A page name was empty (or whitespace) at commit time.
    EmptyName,

    /// Serialization of a record list failed.
    Encode(serde_json::Error),

    /// Raw store error that could not be degraded to a warning.
    Kv(KvError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyName => write!(f, "Page name cannot be empty"),
            StoreError::Encode(err) => write!(f, "Failed to encode records: {}", err),
            StoreError::Kv(err) => write!(f, "Store error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Encode(err) => Some(err),
            StoreError::Kv(err) => Some(err),
            StoreError::EmptyName => None,
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Encode(err)
    }
}

impl From<KvError> for StoreError {
    fn from(err: KvError) -> Self {
        StoreError::Kv(err)
    }
}
