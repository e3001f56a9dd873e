//! Tag tables for the HTML -> Markdown walk
//!
//! Classifies HTML elements into the groups the emitter cares about. Anything
//! not listed is treated as transparent: its content is emitted unwrapped.

/// Elements that start a new Markdown block.
pub const BLOCK_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "body",
    "caption",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "html",
    "li",
    "main",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

/// Elements whose content is never part of the document text.
pub const SKIPPED_TAGS: &[&str] = &[
    "base", "head", "link", "meta", "script", "style", "template", "title",
];

pub fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

pub fn is_skipped(tag: &str) -> bool {
    SKIPPED_TAGS.contains(&tag)
}

pub fn is_list(tag: &str) -> bool {
    matches!(tag, "ul" | "ol")
}

/// `h1`..`h6` -> 1..6
pub fn heading_level(tag: &str) -> Option<usize> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// Inline formatting elements and the delimiter family they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMarker {
    Strong,
    Emphasis,
    Strikethrough,
}

pub fn inline_marker(tag: &str) -> Option<InlineMarker> {
    match tag {
        "strong" | "b" => Some(InlineMarker::Strong),
        "em" | "i" => Some(InlineMarker::Emphasis),
        "del" | "s" | "strike" => Some(InlineMarker::Strikethrough),
        _ => None,
    }
}

/// Language hint for a code block: the first `language-*` or `lang-*` class.
pub fn language_from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    classes.find_map(|class| {
        class
            .strip_prefix("language-")
            .or_else(|| class.strip_prefix("lang-"))
            .filter(|lang| !lang.is_empty())
    })
}
