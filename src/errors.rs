use thiserror::Error;

/// All errors that can occur in secretview.
#[derive(Debug, Error)]
pub enum SecretViewError {
    // --- Construction errors ---
    #[error("Cannot build {record}: required field `{field}` was never set")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    // --- Wire format errors ---
    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid secret content: {0}")]
    InvalidContent(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for secretview results.
pub type Result<T> = std::result::Result<T, SecretViewError>;
