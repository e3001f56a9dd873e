//! Markdown -> HTML conversion
//!
//! Renders Markdown (typically assistant output) into HTML the block editor
//! accepts. Conversion runs in two stages:
//!
//! 1. `parser`: comrak renders CommonMark (plus GFM when `extension` is on)
//!    into standard HTML. Raw HTML in the source passes through.
//! 2. fixes: the ordered [`Fix`] rule set repairs what the editor rejects
//!    (misnested lists, loose list items, empty paragraphs, ...).
//!
//! # Library Choice
//!
//! We use `comrak` for the first stage:
//! - CommonMark + GFM compliant
//! - Pure Rust, no C bindings
//! - Renders HTML directly, so the first stage is a single call
//!
//! # Lossy Conversions
//!
//! - Inter-block newlines are removed by the default rules
//! - Loose list items lose their paragraph wrappers

pub mod parser;

use crate::fixes::{apply_fixes, default_fixes, Fix, FixContext};
use crate::format::Converter;
use crate::RenderRequest;
use parser::{render_base, BaseOptions};

/// Options controlling Markdown -> HTML rendering
#[derive(Debug, Clone)]
pub struct MarkdownToHtmlOptions {
    /// Enable GFM extensions unless a request says otherwise
    pub extension: bool,
    /// Soft line breaks become `<br />`
    pub hard_breaks: bool,
    /// Typographic quotes and dashes
    pub smart_punctuation: bool,
    /// Fixes applied unless a request names its own
    pub rules: Vec<Fix>,
}

impl Default for MarkdownToHtmlOptions {
    fn default() -> Self {
        Self {
            extension: false,
            hard_breaks: true,
            smart_punctuation: false,
            rules: default_fixes(),
        }
    }
}

/// Converter from Markdown to editor-ready HTML
#[derive(Debug, Clone, Default)]
pub struct MarkdownToHtml {
    options: MarkdownToHtmlOptions,
}

impl MarkdownToHtml {
    pub fn new(options: MarkdownToHtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MarkdownToHtmlOptions {
        &self.options
    }

    /// Render with the configured rules and extension flag
    pub fn render(&self, content: &str) -> String {
        self.render_request(&RenderRequest::new(content))
    }

    /// Render with per-request overrides for rules and extension flag
    pub fn render_request(&self, request: &RenderRequest<'_>) -> String {
        if request.content.trim().is_empty() {
            return String::new();
        }

        let extension = request.extension.unwrap_or(self.options.extension);
        let rules = request.rules.unwrap_or(self.options.rules.as_slice());

        let html = render_base(
            request.content,
            BaseOptions {
                extension,
                hard_breaks: self.options.hard_breaks,
                smart_punctuation: self.options.smart_punctuation,
            },
        );
        let output = apply_fixes(&html, rules, &FixContext { extension });

        tracing::debug!(
            input_len = request.content.len(),
            output_len = output.len(),
            rules = rules.len(),
            extension,
            "rendered html from markdown"
        );
        output
    }
}

impl Converter for MarkdownToHtml {
    fn name(&self) -> &str {
        "markdown-to-html"
    }

    fn description(&self) -> &str {
        "Markdown to block editor HTML"
    }

    fn source_format(&self) -> &str {
        "markdown"
    }

    fn target_format(&self) -> &str {
        "html"
    }

    fn render(&self, content: &str) -> String {
        MarkdownToHtml::render(self, content)
    }
}
