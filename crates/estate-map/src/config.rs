//! Codec Configuration - Output layout and validation policy
//!
//! A `CodecConfig` travels with a [`Codec`](crate::Codec) and decides how
//! documents are written and whether the id-uniqueness check runs when a
//! map is read or written.

use serde::{Deserialize, Serialize};

/// Configuration for encoding and decoding maps
///
/// # Example
///
/// ```
/// use estate_map::CodecConfig;
///
/// let config = CodecConfig::default();
/// assert!(config.pretty());
/// assert!(config.validate_on_load());
///
/// let config = CodecConfig::default().with_pretty(false);
/// assert!(!config.pretty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Indented, one-field-per-line output
    pretty: bool,
    /// Reject decoded maps with duplicate ids
    validate_on_load: bool,
    /// Refuse to encode maps with duplicate ids
    validate_on_save: bool,
}

impl CodecConfig {
    /// Compact output with no validation in either direction
    ///
    /// For callers that run their own validation pass.
    pub fn lenient() -> Self {
        Self {
            pretty: false,
            validate_on_load: false,
            validate_on_save: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_validate_on_load(mut self, validate: bool) -> Self {
        self.validate_on_load = validate;
        self
    }

    pub fn with_validate_on_save(mut self, validate: bool) -> Self {
        self.validate_on_save = validate;
        self
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn validate_on_load(&self) -> bool {
        self.validate_on_load
    }

    pub fn validate_on_save(&self) -> bool {
        self.validate_on_save
    }
}

impl Default for CodecConfig {
    /// Pretty output, validation on load and save
    fn default() -> Self {
        Self {
            pretty: true,
            validate_on_load: true,
            validate_on_save: true,
        }
    }
}
