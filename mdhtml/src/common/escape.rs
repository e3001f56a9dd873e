//! Markdown escaping helpers
//!
//! Text pulled out of HTML must not turn into Markdown syntax when the output
//! is parsed again: `*stars*` typed by a user are not emphasis. Escaping is
//! split in two passes because some constructs only matter at the start of a
//! line (headings, list markers, block quotes).

use once_cell::sync::Lazy;
use regex::Regex;

/// Line starts that would open a block construct
static BLOCK_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:#{1,6}(?:\s|$)|[-+](?:\s|$)|>|[-=]+\s*$|~~~)").expect("valid regex")
});

/// `1. ` / `1) ` ordered list markers at line start
static ORDERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,9})([.)])(\s|$)").expect("valid regex"));

/// Character references CommonMark decodes in text (`&copy;`, `&#169;`, `&#xA9;`)
static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[A-Za-z][A-Za-z0-9]{1,31});")
        .expect("valid regex")
});

/// Backslash-escape characters that are Markdown syntax anywhere in a line
///
/// `<` would open raw HTML or an autolink, and `&` only matters when it
/// starts a character reference.
pub fn escape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for (index, ch) in text.char_indices() {
        let escape = match ch {
            '\\' | '*' | '_' | '`' | '[' | ']' | '<' => true,
            '&' => ENTITY.is_match(&text[index..]),
            _ => false,
        };
        if escape {
            output.push('\\');
        }
        output.push(ch);
    }
    output
}

/// Escape a trailing `#` run in heading text, which ATX headings would
/// otherwise read as an optional closing sequence
pub fn escape_heading_end(text: &str) -> String {
    let content = text.trim_end_matches('#');
    if content.len() == text.len() || !(content.is_empty() || content.ends_with(' ')) {
        return text.to_string();
    }
    format!("{content}\\{}", &text[content.len()..])
}

/// Escape a block-opening construct at the start of each line
pub fn escape_line_starts(text: &str) -> String {
    text.split('\n')
        .map(escape_line_start)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line_start(line: &str) -> String {
    if BLOCK_START.is_match(line) {
        return format!("\\{line}");
    }
    ORDERED_MARKER
        .replace(line, "${1}\\${2}${3}")
        .into_owned()
}

/// Wrap verbatim text in a code span, sizing the backtick fence so the
/// content can contain backticks itself
pub fn code_span(content: &str) -> String {
    let content = content.replace('\n', " ");
    if content.is_empty() {
        return String::new();
    }
    let fence = "`".repeat(longest_backtick_run(&content) + 1);
    let all_spaces = content.chars().all(|ch| ch == ' ');
    let needs_padding = content.starts_with('`')
        || content.ends_with('`')
        || (!all_spaces && content.starts_with(' ') && content.ends_with(' '));
    if needs_padding {
        format!("{fence} {content} {fence}")
    } else {
        format!("{fence}{content}{fence}")
    }
}

/// Fence for a fenced code block: three backticks, or one more than the
/// longest backtick run in the content
pub fn code_fence(content: &str) -> String {
    "`".repeat((longest_backtick_run(content) + 1).max(3))
}

fn longest_backtick_run(content: &str) -> usize {
    content
        .split(|ch| ch != '`')
        .map(str::len)
        .max()
        .unwrap_or(0)
}

/// Link/image destination: spaces percent-encoded, parentheses escaped
pub fn escape_destination(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// Double-quoted link title contents
pub fn escape_title(title: &str) -> String {
    title.replace('"', "\\\"")
}

/// Pipe table cell contents
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
