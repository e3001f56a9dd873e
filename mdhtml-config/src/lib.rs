//! Shared configuration loader for the mdhtml converters.
//!
//! `defaults/mdhtml.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdhtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdhtml::fixes::resolve;
use mdhtml::{ConvertError, HtmlToMarkdownOptions, MarkdownToHtmlOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdhtml.default.toml");

/// Top-level configuration consumed by mdhtml applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdhtmlConfig {
    pub html_to_markdown: HtmlToMarkdownConfig,
    pub markdown_to_html: MarkdownToHtmlConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the knobs exposed by the HTML -> Markdown converter.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlToMarkdownConfig {
    pub bullet_marker: char,
    pub emphasis_marker: char,
    pub strong_marker: String,
    pub list_indent: usize,
    pub escape_markdown: bool,
}

impl HtmlToMarkdownConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.bullet_marker, '-' | '*' | '+') {
            return Err(invalid("html_to_markdown.bullet_marker", "\"-\", \"*\" or \"+\""));
        }
        if !matches!(self.emphasis_marker, '*' | '_') {
            return Err(invalid("html_to_markdown.emphasis_marker", "\"*\" or \"_\""));
        }
        if !matches!(self.strong_marker.as_str(), "**" | "__") {
            return Err(invalid("html_to_markdown.strong_marker", "\"**\" or \"__\""));
        }
        if self.list_indent == 0 {
            return Err(invalid("html_to_markdown.list_indent", "at least 1"));
        }
        Ok(())
    }
}

impl From<HtmlToMarkdownConfig> for HtmlToMarkdownOptions {
    fn from(config: HtmlToMarkdownConfig) -> Self {
        HtmlToMarkdownOptions {
            bullet_marker: config.bullet_marker,
            emphasis_marker: config.emphasis_marker,
            strong_marker: config.strong_marker,
            list_indent: config.list_indent,
            escape_markdown: config.escape_markdown,
        }
    }
}

impl From<&HtmlToMarkdownConfig> for HtmlToMarkdownOptions {
    fn from(config: &HtmlToMarkdownConfig) -> Self {
        HtmlToMarkdownOptions {
            bullet_marker: config.bullet_marker,
            emphasis_marker: config.emphasis_marker,
            strong_marker: config.strong_marker.clone(),
            list_indent: config.list_indent,
            escape_markdown: config.escape_markdown,
        }
    }
}

/// Mirrors the knobs exposed by the Markdown -> HTML converter.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownToHtmlConfig {
    pub extension: bool,
    pub hard_breaks: bool,
    pub smart_punctuation: bool,
    /// Built-in fix names, applied in this order
    pub rules: Vec<String>,
}

/// Fix names are only checked here, where they become real rules.
impl TryFrom<&MarkdownToHtmlConfig> for MarkdownToHtmlOptions {
    type Error = ConvertError;

    fn try_from(config: &MarkdownToHtmlConfig) -> Result<Self, Self::Error> {
        Ok(MarkdownToHtmlOptions {
            extension: config.extension,
            hard_breaks: config.hard_breaks,
            smart_punctuation: config.smart_punctuation,
            rules: resolve(&config.rules)?,
        })
    }
}

impl TryFrom<MarkdownToHtmlConfig> for MarkdownToHtmlOptions {
    type Error = ConvertError;

    fn try_from(config: MarkdownToHtmlConfig) -> Result<Self, Self::Error> {
        MarkdownToHtmlOptions::try_from(&config)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter directive
    pub level: String,
}

fn invalid(key: &str, expected: &str) -> ConfigError {
    ConfigError::Message(format!("invalid value for `{key}`: expected {expected}"))
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder, deserialize and validate the resulting configuration.
    pub fn build(self) -> Result<MdhtmlConfig, ConfigError> {
        let config: MdhtmlConfig = self.builder.build()?.try_deserialize()?;
        config.html_to_markdown.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdhtmlConfig, ConfigError> {
    Loader::new().build()
}
