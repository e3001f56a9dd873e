//! Whitespace normalization and line prefixing
//!
//! Inline content is accumulated in an [`InlineBuffer`], which collapses runs
//! of HTML whitespace across node boundaries the way a browser lays out text.
//! Verbatim pieces (code spans, delimiters, link destinations) bypass the
//! collapsing through [`InlineBuffer::push_raw`].

use crate::dom::is_html_whitespace;

/// Markdown hard line break. A trailing backslash survives editors that strip
/// trailing spaces, unlike the two-space form.
pub const HARD_BREAK: &str = "\\\n";

/// Accumulates one run of inline Markdown
#[derive(Debug, Default, Clone)]
pub struct InlineBuffer {
    text: String,
}

impl InlineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw accumulated text, with unresolved leading/trailing spaces
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when nothing but spaces has been pushed
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(|ch| ch == ' ')
    }

    fn ends_with_space(&self) -> bool {
        self.text.ends_with(' ') || self.text.ends_with('\n')
    }

    /// Push text, collapsing every whitespace run into a single space
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            if is_html_whitespace(ch) {
                if !self.ends_with_space() {
                    self.text.push(' ');
                }
            } else {
                self.text.push(ch);
            }
        }
    }

    /// Push text verbatim
    pub fn push_raw(&mut self, raw: &str) {
        self.text.push_str(raw);
    }

    /// Push a hard line break; ignored before any content
    pub fn push_break(&mut self) {
        if self.is_blank() {
            return;
        }
        let content_len = self.text.trim_end_matches(' ').len();
        self.text.truncate(content_len);
        self.text.push_str(HARD_BREAK);
    }

    /// Append the raw contents of a nested buffer, merging boundary spaces
    pub fn append(&mut self, inner: &str) {
        match inner.strip_prefix(' ') {
            Some(rest) if self.ends_with_space() => self.text.push_str(rest),
            _ => self.text.push_str(inner),
        }
    }

    /// Wrap a nested run in delimiters, keeping its outer spaces outside
    ///
    /// `" bold "` wrapped in `**` becomes `" **bold** "`; delimiters hugging
    /// whitespace would not parse as emphasis. A run that is only whitespace
    /// is not wrapped at all.
    pub fn push_wrapped(&mut self, inner: &str, open: &str, close: &str) {
        let trimmed = inner.trim_matches(' ');
        let (core, trailing_break) = match trimmed.strip_suffix(HARD_BREAK) {
            Some(core) => (core.trim_end_matches(' '), true),
            None => (trimmed, false),
        };

        if core.is_empty() {
            if trailing_break {
                self.push_break();
            } else if !inner.is_empty() {
                self.push_text(" ");
            }
            return;
        }

        if inner.starts_with(' ') {
            self.push_text(" ");
        }
        self.push_raw(open);
        self.push_raw(core);
        self.push_raw(close);
        if trailing_break {
            self.push_break();
        } else if inner.ends_with(' ') {
            self.push_text(" ");
        }
    }

    /// Resolve the run: trim outer spaces and drop breaks at either end
    pub fn finish(self) -> String {
        let mut text = self.text;
        loop {
            let content_len = text.trim_end_matches(' ').len();
            text.truncate(content_len);
            match text.strip_suffix(HARD_BREAK) {
                Some(rest) => {
                    let rest_len = rest.len();
                    text.truncate(rest_len);
                }
                None => break,
            }
        }
        text.trim_start_matches(' ').to_string()
    }
}

/// Indent every non-empty line of `text`, optionally leaving the first alone
pub fn indent_lines(text: &str, indent: &str, skip_first: bool) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| {
            if line.is_empty() || (skip_first && index == 0) {
                line.to_string()
            } else {
                format!("{indent}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line for a block quote; blank lines get a bare `>`
pub fn quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
