//! Markdown <-> HTML conversion for block editor content
//!
//!     This crate converts editor HTML into Markdown an assistant can read, and
//!     renders assistant Markdown back into HTML the block editor accepts.
//!
//!     TLDR:
//!         - HTML -> Markdown walks a tolerant html5ever parse and emits Markdown directly
//!         - Markdown -> HTML renders with comrak, then runs an ordered list of fixes
//!         - Rendering never fails; malformed input is repaired best-effort
//!         - This is a pure lib: no printing, no env vars. The CLI lives in mdhtml-cli.
//!
//! Architecture
//!
//!     The two directions share no runtime state. What they do share is the owned
//!     document tree (./dom) that both the HTML -> Markdown walk and the tree fixes
//!     operate on, built from html5ever's rcdom and serialized back through it.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Converter trait definition
//!     ├── registry.rs             # ConverterRegistry for discovery and selection
//!     ├── dom                     # Owned document tree, parse + serialize
//!     ├── common                  # Tag tables, whitespace and escaping helpers
//!     ├── fixes                   # HTML repair rules for Markdown -> HTML output
//!     ├── formats
//!     │   ├── html                # HTML -> Markdown
//!     │   └── markdown            # Markdown -> HTML
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Fixes
//!
//!     A Fix is a named, idempotent HTML -> HTML repair with a cheap predicate. The
//!     default rule set runs in a fixed order (see fixes::default_fixes); a request
//!     may replace it entirely. A fix that cannot repair confidently returns its
//!     input unchanged, and a fix that panics is skipped.

pub mod common;
pub mod dom;
pub mod error;
pub mod fixes;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::ConvertError;
pub use fixes::{Fix, FixContext};
pub use format::Converter;
pub use formats::{HtmlToMarkdown, HtmlToMarkdownOptions, MarkdownToHtml, MarkdownToHtmlOptions};
pub use registry::ConverterRegistry;

use once_cell::sync::Lazy;

/// Process-wide HTML -> Markdown converter with default options
pub static DEFAULT_MARKDOWN_CONVERTER: Lazy<HtmlToMarkdown> = Lazy::new(HtmlToMarkdown::default);

/// Process-wide Markdown -> HTML converter with the default rule set
pub static DEFAULT_HTML_CONVERTER: Lazy<MarkdownToHtml> = Lazy::new(MarkdownToHtml::default);

/// One conversion call's input
///
/// `rules` and `extension` only affect Markdown -> HTML; `None` means the
/// converter's configured value.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub content: &'a str,
    pub rules: Option<&'a [Fix]>,
    pub extension: Option<bool>,
}

impl<'a> RenderRequest<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            rules: None,
            extension: None,
        }
    }

    pub fn with_rules(mut self, rules: &'a [Fix]) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_extension(mut self, extension: bool) -> Self {
        self.extension = Some(extension);
        self
    }
}

/// Convert an HTML fragment to Markdown using the default converter
pub fn render_markdown_from_html(request: RenderRequest<'_>) -> String {
    DEFAULT_MARKDOWN_CONVERTER.render(request.content)
}

/// Convert Markdown to editor HTML using the default converter
pub fn render_html_from_markdown(request: RenderRequest<'_>) -> String {
    DEFAULT_HTML_CONVERTER.render_request(&request)
}
