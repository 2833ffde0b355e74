//! Error types for estate-map

use std::path::PathBuf;
use thiserror::Error;

use crate::validate::ValidationError;

/// Map loading and saving error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported map format: {0:?}")]
    UnsupportedFormat(PathBuf),
}

/// The document does not match the save-file shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Text is not a well-formed document
    #[error("Malformed document: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    /// The root object has no `mapinfo` key
    #[error("Missing root key `mapinfo`")]
    MissingRoot,

    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Wrong type or out-of-range enum value
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Encode failed: {0}")]
    Encode(String),
}

impl SchemaError {
    /// Classify a typed-decoding failure reported by serde.
    ///
    /// The only place that reads serde's message text. A trailing position
    /// (`at line 3 column 9`) is allowed after the field name.
    pub(crate) fn from_data_message(message: String) -> Self {
        match message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next())
        {
            Some(field) => SchemaError::MissingField(field.to_string()),
            None => SchemaError::InvalidValue(message),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
