//! Whitespace cleanups (string fixes)
//!
//! The editor turns whitespace text between blocks into empty paragraphs or
//! stray spaces, so whitespace touching a block-level tag is dropped: whole
//! gaps between blocks, and the ends of text next to a block boundary.
//! Whitespace inside `<pre>` is content and is never touched.

use super::FixContext;
use crate::common::tags;
use crate::dom::is_html_whitespace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Any tag-like token, comments included
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Element name of a start or end tag
static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</?([A-Za-z][A-Za-z0-9-]*)").expect("valid regex"));

pub(super) fn has_tags(content: &str, _context: &FixContext) -> bool {
    content.contains('<')
}

pub(super) fn has_outer_whitespace(content: &str, _context: &FixContext) -> bool {
    content.len() != content.trim().len()
}

struct Tag {
    name: String,
    closing: bool,
}

fn parse_tag(token: &str) -> Option<Tag> {
    let name = TAG_NAME.captures(token)?.get(1)?.as_str().to_ascii_lowercase();
    Some(Tag {
        name,
        closing: token.starts_with("</"),
    })
}

fn is_block_tag(tag: Option<&Tag>) -> bool {
    tag.is_some_and(|tag| tags::is_block(&tag.name))
}

pub(super) fn block_whitespace<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    let mut output = String::with_capacity(content.len());
    let mut changed = false;
    let mut last_end = 0;
    let mut previous: Option<Tag> = None;
    let mut pre_depth: usize = 0;

    for token in TAG.find_iter(content) {
        let gap = &content[last_end..token.start()];
        let current = parse_tag(token.as_str());

        let mut kept = gap;
        if pre_depth == 0 {
            if is_block_tag(previous.as_ref()) {
                kept = kept.trim_start_matches(is_html_whitespace);
            }
            if is_block_tag(current.as_ref()) {
                kept = kept.trim_end_matches(is_html_whitespace);
            }
        }
        changed |= kept.len() != gap.len();
        output.push_str(kept);
        output.push_str(token.as_str());

        if let Some(tag) = &current {
            if tag.name == "pre" {
                if tag.closing {
                    pre_depth = pre_depth.saturating_sub(1);
                } else {
                    pre_depth += 1;
                }
            }
        }

        last_end = token.end();
        previous = current;
    }

    if !changed {
        return Cow::Borrowed(content);
    }
    output.push_str(&content[last_end..]);
    Cow::Owned(output)
}

pub(super) fn trim<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    Cow::Borrowed(content.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> FixContext {
        FixContext::default()
    }

    #[test]
    fn test_newlines_between_blocks_are_dropped() {
        let html = "<h2>Title</h2>\n<p>text</p>\n<ul>\n<li>a</li>\n</ul>\n";
        assert_eq!(
            block_whitespace(html, &ctx()),
            "<h2>Title</h2><p>text</p><ul><li>a</li></ul>\n"
        );
    }

    #[test]
    fn test_text_next_to_block_boundary_is_trimmed() {
        let html = "<ul>\n<li>a\n<ul>\n<li>b</li>\n</ul>\n</li>\n</ul>";
        assert_eq!(
            block_whitespace(html, &ctx()),
            "<ul><li>a<ul><li>b</li></ul></li></ul>"
        );
        assert_eq!(block_whitespace("<p> a <em>b</em> </p>", &ctx()), "<p>a <em>b</em></p>");
    }

    #[test]
    fn test_inline_whitespace_is_kept() {
        let html = "<p><strong>a</strong> <em>b</em></p>";
        assert!(matches!(block_whitespace(html, &ctx()), Cow::Borrowed(_)));
    }

    #[test]
    fn test_pre_content_is_kept() {
        let html = "<pre><code>\n<div>\n</div>\n</code></pre>\n<p>x</p>";
        assert_eq!(
            block_whitespace(html, &ctx()),
            "<pre><code>\n<div>\n</div>\n</code></pre><p>x</p>"
        );
    }

    #[test]
    fn test_trim() {
        assert_eq!(trim("\n <p>a</p>\n", &ctx()), "<p>a</p>");
        assert!(!has_outer_whitespace("<p>a</p>", &ctx()));
    }
}
