//! Core error types for Protean

use thiserror::Error;

/// Main error type for Protean operations
#[derive(Error, Debug)]
pub enum ProteanError {
    #[error("invalid residue '{residue}' at position {position}")]
    InvalidResidue { position: usize, residue: char },

    #[error("sequence is empty after removing whitespace")]
    EmptyInput,

    #[error("cannot analyze an empty sequence")]
    EmptySequence,

    #[error("reference function table has no entries")]
    EmptyReferenceTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parsing error: {0}")]
    Parse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for Protean operations
pub type ProteanResult<T> = Result<T, ProteanError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for ProteanError {
    fn from(err: serde_json::Error) -> Self {
        ProteanError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for ProteanError {
    fn from(err: anyhow::Error) -> Self {
        ProteanError::Other(err.to_string())
    }
}
