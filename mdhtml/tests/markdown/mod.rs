//! Markdown -> HTML tests
//!
//! Output is checked after the default fix pipeline, since that is what the
//! editor receives.

mod render;
mod rules;

use mdhtml::{render_html_from_markdown, RenderRequest};

pub(crate) fn html(markdown: &str) -> String {
    render_html_from_markdown(RenderRequest::new(markdown))
}
