//! Converter trait definition
//!
//! This module defines the Converter trait that both directions implement.
//! The trait provides a uniform interface so the registry and the CLI can
//! pick a converter by source and target format name.

/// Trait for one-directional document converters
///
/// Implementors turn a source string in one format into a string in another.
/// Rendering is infallible: malformed input is repaired best-effort.
///
/// # Examples
///
/// ```ignore
/// struct Upper;
///
/// impl Converter for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn source_format(&self) -> &str {
///         "text"
///     }
///
///     fn target_format(&self) -> &str {
///         "shout"
///     }
///
///     fn render(&self, content: &str) -> String {
///         content.to_uppercase()
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of this converter (e.g., "html-to-markdown")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Format name this converter reads (e.g., "html")
    fn source_format(&self) -> &str;

    /// Format name this converter produces (e.g., "markdown")
    fn target_format(&self) -> &str;

    /// Convert `content` into the target format
    fn render(&self, content: &str) -> String;
}

/// File extensions per format name, used for detection from filenames.
///
/// Extensions are listed without the leading dot.
pub const FORMAT_EXTENSIONS: &[(&str, &[&str])] = &[
    ("html", &["html", "htm"]),
    ("markdown", &["md", "markdown"]),
];

/// Look up the format name owning a file extension.
pub fn format_for_extension(extension: &str) -> Option<&'static str> {
    FORMAT_EXTENSIONS
        .iter()
        .find(|(_, extensions)| extensions.contains(&extension))
        .map(|(name, _)| *name)
}
