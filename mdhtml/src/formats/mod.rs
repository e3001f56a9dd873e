//! Converter implementations
//!
//! One module per source format; each converts into the other format.

pub mod html;
pub mod markdown;

pub use html::{HtmlToMarkdown, HtmlToMarkdownOptions};
pub use markdown::{MarkdownToHtml, MarkdownToHtmlOptions};
