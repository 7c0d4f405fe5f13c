//! Store Errors

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced to the view as a single message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport failure or non-success response from the seed endpoint
    Network(String),
    /// Payload could not be decoded
    Decode(String),
    /// Persistent slot unavailable or rejected the write
    Storage(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Network(msg) => write!(f, "Network error: {}", msg),
            StoreError::Decode(msg) => write!(f, "Decode error: {}", msg),
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}
