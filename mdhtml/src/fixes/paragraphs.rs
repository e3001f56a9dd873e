//! Paragraph cleanups (string fixes)

use super::FixContext;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static PARAGRAPH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<p[\s>/]").expect("valid regex"));

/// A paragraph with nothing visible in it: whitespace, non-breaking spaces
/// and line breaks only
static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<p(?:\s[^>]*)?>(?:\s|&nbsp;|&#160;|&#xa0;|<br\s*/?>)*</p>")
        .expect("valid regex")
});

/// Output that is exactly one paragraph, surrounding whitespace aside
static SINGLE_PARAGRAPH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)^\s*<p(?:\s[^>]*)?>(.*)</p>\s*$").expect("valid regex")
});

pub(super) fn has_paragraph(content: &str, _context: &FixContext) -> bool {
    PARAGRAPH_TAG.is_match(content)
}

pub(super) fn empty_paragraphs<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    let mut output = Cow::Borrowed(content);
    loop {
        let replaced = match EMPTY_PARAGRAPH.replace_all(&output, "") {
            Cow::Owned(replaced) => Some(replaced),
            Cow::Borrowed(_) => None,
        };
        match replaced {
            Some(replaced) => output = Cow::Owned(replaced),
            None => return output,
        }
    }
}

pub(super) fn unwrap_single_paragraph<'a>(
    content: &'a str,
    _context: &FixContext,
) -> Cow<'a, str> {
    let Some(inner) = SINGLE_PARAGRAPH
        .captures(content)
        .and_then(|captures| captures.get(1))
    else {
        return Cow::Borrowed(content);
    };

    // `<p>a</p><p>b</p>` also matches the outer tags
    if inner.as_str().to_ascii_lowercase().contains("</p>") {
        return Cow::Borrowed(content);
    }

    Cow::Borrowed(inner.as_str())
}
