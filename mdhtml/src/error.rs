//! Error types for conversion operations
//!
//! Rendering itself never fails: parsing is tolerant and fixes degrade to
//! no-ops. These errors cover the edges around it (looking up converters and
//! fixes by name, and serializer failures inside tree fixes).

use thiserror::Error;

/// Errors that can occur around conversion operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// No converter registered for the requested format pair
    #[error("No converter from '{from}' to '{to}'")]
    ConverterNotFound { from: String, to: String },
    /// Format name not known to the registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Fix name not part of the built-in rule set
    #[error("Unknown fix '{0}'")]
    UnknownFix(String),
    /// Error while serializing a repaired tree back to HTML
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Operation not supported
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
