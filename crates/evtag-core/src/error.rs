use thiserror::Error;

/// Top-level error type for the Evtag system.
///
/// Subsystem crates define their own error types and convert into this one
/// where they cross crate boundaries, so `?` works throughout.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EvtagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Event not found: {id}")]
    EventNotFound { id: u64 },

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for EvtagError {
    fn from(err: toml::de::Error) -> Self {
        EvtagError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EvtagError {
    fn from(err: toml::ser::Error) -> Self {
        EvtagError::Config(err.to_string())
    }
}

/// A specialized `Result` type for Evtag operations.
pub type Result<T> = std::result::Result<T, EvtagError>;
