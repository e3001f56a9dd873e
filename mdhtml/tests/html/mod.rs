//! HTML -> Markdown tests
//!
//! Each file covers one family of elements; all go through the public
//! `render_markdown_from_html` entry point.

mod blocks;
mod inline;
mod lists;
mod tables;

use mdhtml::{render_markdown_from_html, RenderRequest};

pub(crate) fn md(html: &str) -> String {
    render_markdown_from_html(RenderRequest::new(html))
}
