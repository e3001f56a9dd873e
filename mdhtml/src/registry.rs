//! Converter registry for converter discovery and selection
//!
//! This module provides a centralized registry for all available converters.
//! Converters are registered and retrieved by their source and target format.

use crate::error::ConvertError;
use crate::format::{format_for_extension, Converter};
use std::collections::HashMap;

/// Registry of converters, keyed by `(source, target)` format pair
///
/// # Examples
///
/// ```ignore
/// let registry = ConverterRegistry::default();
///
/// let converter = registry.get("html", "markdown")?;
/// let markdown = converter.render("<p>Hello</p>");
/// ```
pub struct ConverterRegistry {
    converters: HashMap<(String, String), Box<dyn Converter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        ConverterRegistry {
            converters: HashMap::new(),
        }
    }

    /// Register a converter
    ///
    /// If a converter for the same format pair already exists, it will be replaced.
    pub fn register<C: Converter + 'static>(&mut self, converter: C) {
        let key = (
            converter.source_format().to_string(),
            converter.target_format().to_string(),
        );
        self.converters.insert(key, Box::new(converter));
    }

    /// Get the converter for a format pair
    pub fn get(&self, from: &str, to: &str) -> Result<&dyn Converter, ConvertError> {
        if !self.has_format(from) {
            return Err(ConvertError::FormatNotFound(from.to_string()));
        }
        if !self.has_format(to) {
            return Err(ConvertError::FormatNotFound(to.to_string()));
        }
        self.converters
            .get(&(from.to_string(), to.to_string()))
            .map(|converter| converter.as_ref())
            .ok_or_else(|| ConvertError::ConverterNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// Check if a converter exists for a format pair
    pub fn has(&self, from: &str, to: &str) -> bool {
        self.converters
            .contains_key(&(from.to_string(), to.to_string()))
    }

    /// Check if any converter reads or writes `format`
    pub fn has_format(&self, format: &str) -> bool {
        self.converters
            .keys()
            .any(|(source, target)| source == format || target == format)
    }

    /// List all converter names (sorted)
    pub fn list_converters(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .converters
            .values()
            .map(|converter| converter.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// List all format names any converter reads or writes (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self
            .converters
            .keys()
            .flat_map(|(source, target)| [source.clone(), target.clone()])
            .collect();
        formats.sort();
        formats.dedup();
        formats
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a registered format owns the extension.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let registry = ConverterRegistry::default();
    /// assert_eq!(registry.detect_format_from_filename("page.html"), Some("html".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("notes.md"), Some("markdown".to_string()));
    /// assert_eq!(registry.detect_format_from_filename("doc.unknown"), None);
    /// ```
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();

        format_for_extension(&extension)
            .filter(|format| self.has_format(format))
            .map(str::to_string)
    }

    /// Convert `content` between two formats
    pub fn convert(&self, content: &str, from: &str, to: &str) -> Result<String, ConvertError> {
        if from == to {
            return Err(ConvertError::NotSupported(format!(
                "Source and target format are both '{from}'"
            )));
        }
        Ok(self.get(from, to)?.render(content))
    }

    /// Create a registry with both built-in converters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::HtmlToMarkdown::default());
        registry.register(crate::formats::MarkdownToHtml::default());

        registry
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
