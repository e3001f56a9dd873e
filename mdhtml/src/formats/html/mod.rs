//! HTML -> Markdown conversion
//!
//! Turns an editor HTML fragment into Markdown an assistant can read. The
//! fragment is parsed tolerantly with html5ever (see [`crate::dom`]) and the
//! resulting tree is walked depth first by the emitter.
//!
//! # Element Mapping Table
//!
//! | HTML                               | Markdown                                   |
//! |------------------------------------|--------------------------------------------|
//! | `<h1>`..`<h6>`                     | `#`..`######` ATX heading                  |
//! | `<p>`, `<div>`, `<section>`, ...   | paragraph, one blank line between blocks   |
//! | `<strong>` / `<b>`                 | `**text**` (marker configurable)           |
//! | `<em>` / `<i>`                     | `*text*` (marker configurable)             |
//! | `<del>` / `<s>` / `<strike>`       | `~~text~~`                                 |
//! | `<code>`                           | code span, backtick fence sized to content |
//! | `<pre>` (+ `<code>`)               | fenced block, `language-*` class as hint   |
//! | `<a href title>`                   | `[text](href "title")`                     |
//! | `<img src alt title>`              | `![alt](src "title")`                      |
//! | `<ul>` / `<ol start>` / `<li>`     | `-` / `N.` items, nested lists indented    |
//! | `<input type=checkbox>` in `<li>`  | `[x]` / `[ ]`                              |
//! | `<blockquote>`                     | `> ` prefixed lines                        |
//! | `<hr>`                             | `---`                                      |
//! | `<table>`                          | GFM pipe table, first row as header        |
//! | `<br>`                             | `\` hard break                             |
//! | comments, `<script>`, `<style>`... | nothing                                    |
//!
//! Unknown elements are transparent: their children are emitted in place.
//!
//! # Lossy Conversions
//!
//! - Attributes other than `href`, `src`, `alt`, `title`, `start` and code
//!   language classes are dropped
//! - Block editor comments (`<!-- wp:... -->`) are dropped
//! - Table cell alignment and spans are not represented

mod emitter;

use crate::dom::parse_fragment;
use crate::format::Converter;
use emitter::MarkdownEmitter;

/// Options controlling the Markdown produced from HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlToMarkdownOptions {
    /// Bullet for unordered list items (`-`, `*` or `+`)
    pub bullet_marker: char,
    /// Emphasis delimiter (`*` or `_`)
    pub emphasis_marker: char,
    /// Strong delimiter (`**` or `__`)
    pub strong_marker: String,
    /// Spaces per nesting level for list content
    pub list_indent: usize,
    /// Backslash-escape Markdown syntax found in text
    pub escape_markdown: bool,
}

impl Default for HtmlToMarkdownOptions {
    fn default() -> Self {
        Self {
            bullet_marker: '-',
            emphasis_marker: '*',
            strong_marker: "**".to_string(),
            list_indent: 4,
            escape_markdown: true,
        }
    }
}

/// Converter from HTML fragments to Markdown
#[derive(Debug, Clone, Default)]
pub struct HtmlToMarkdown {
    options: HtmlToMarkdownOptions,
}

impl HtmlToMarkdown {
    pub fn new(options: HtmlToMarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlToMarkdownOptions {
        &self.options
    }

    /// Convert an HTML fragment to Markdown. Never fails; empty input gives
    /// empty output.
    pub fn render(&self, content: &str) -> String {
        if content.trim().is_empty() {
            return String::new();
        }
        let root = parse_fragment(content);
        let markdown = MarkdownEmitter::new(&self.options).emit(&root);
        tracing::debug!(
            input_len = content.len(),
            output_len = markdown.len(),
            "rendered markdown from html"
        );
        markdown
    }
}

impl Converter for HtmlToMarkdown {
    fn name(&self) -> &str {
        "html-to-markdown"
    }

    fn description(&self) -> &str {
        "HTML fragment to Markdown"
    }

    fn source_format(&self) -> &str {
        "html"
    }

    fn target_format(&self) -> &str {
        "markdown"
    }

    fn render(&self, content: &str) -> String {
        HtmlToMarkdown::render(self, content)
    }
}
