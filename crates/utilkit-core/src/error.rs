//! Error types for the utility kit

use thiserror::Error;

/// The main error type for utility kit operations
#[derive(Debug, Error)]
pub enum KitError {
    #[error("Clip not found: {0}")]
    ClipNotFound(String),

    #[error("Invalid clip reference: {0}")]
    InvalidClipReference(String),

    #[error("Frame {frame} out of range for clip '{clip}' ({frame_count} frames)")]
    FrameOutOfRange {
        clip: String,
        frame: usize,
        frame_count: usize,
    },

    #[error("Invalid clip '{clip}': {reason}")]
    InvalidClip { clip: String, reason: String },

    #[error("Capability not found: {0}")]
    CapabilityNotFound(String),

    #[error("Duplicate capability: {0}")]
    DuplicateCapability(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for utility kit operations
pub type Result<T> = std::result::Result<T, KitError>;

impl From<toml::de::Error> for KitError {
    fn from(err: toml::de::Error) -> Self {
        KitError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for KitError {
    fn from(err: toml::ser::Error) -> Self {
        KitError::TomlSerError(err.to_string())
    }
}

impl From<bincode::Error> for KitError {
    fn from(err: bincode::Error) -> Self {
        KitError::SerializationError(err.to_string())
    }
}
