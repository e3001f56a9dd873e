//! Base Markdown parsing (Markdown -> HTML)
//!
//! Stage one of the Markdown -> HTML conversion: comrak turns CommonMark into
//! standard HTML. Editor-specific repairs happen afterwards in the fix
//! pipeline.

use comrak::{markdown_to_html, ComrakOptions};

/// Parser settings that vary per request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseOptions {
    /// GFM tables, strikethrough, autolinks and task lists
    pub extension: bool,
    /// Soft line breaks become `<br />`
    pub hard_breaks: bool,
    /// Typographic quotes and dashes
    pub smart_punctuation: bool,
}

fn comrak_options(base: BaseOptions) -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = base.extension;
    options.extension.strikethrough = base.extension;
    options.extension.autolink = base.extension;
    options.extension.tasklist = base.extension;
    options.parse.smart = base.smart_punctuation;
    options.render.hardbreaks = base.hard_breaks;
    // Model output routinely embeds HTML; sanitizing is the caller's job
    options.render.unsafe_ = true;
    options
}

/// Render Markdown to HTML with comrak
pub fn render_base(content: &str, base: BaseOptions) -> String {
    if content.trim().is_empty() {
        return String::new();
    }
    markdown_to_html(content, &comrak_options(base))
}
