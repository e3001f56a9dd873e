//! Markdown emission (DocumentNode -> Markdown)
//!
//! Depth-first walk over the parsed fragment. Block elements produce whole
//! [`Block`]s; everything else accumulates into an [`InlineBuffer`] that is
//! flushed as a paragraph when the next block starts.

use super::HtmlToMarkdownOptions;
use crate::common::escape::{
    code_fence, code_span, escape_destination, escape_heading_end, escape_line_starts, escape_table_cell,
    escape_text, escape_title,
};
use crate::common::tags::{self, InlineMarker};
use crate::common::{indent_lines, quote_lines, InlineBuffer};
use crate::dom::{DocumentNode, NodeKind};

/// Where inline content ends up, which decides how line breaks render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineContext {
    Flow,
    Heading,
    TableCell,
}

/// One rendered Markdown block
#[derive(Debug)]
struct Block {
    markdown: String,
    /// Lists follow their list item's text on the next line, not after a
    /// blank line, so list items stay tight
    is_list: bool,
}

impl Block {
    fn text(markdown: String) -> Self {
        Self {
            markdown,
            is_list: false,
        }
    }

    fn list(markdown: String) -> Self {
        Self {
            markdown,
            is_list: true,
        }
    }
}

/// Largest number CommonMark accepts in an ordered list marker (9 digits)
const MAX_ORDERED_NUMBER: u64 = 999_999_999;

fn join_blocks(blocks: Vec<Block>) -> String {
    blocks
        .into_iter()
        .map(|block| block.markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub(crate) struct MarkdownEmitter<'a> {
    options: &'a HtmlToMarkdownOptions,
}

impl<'a> MarkdownEmitter<'a> {
    pub(crate) fn new(options: &'a HtmlToMarkdownOptions) -> Self {
        Self { options }
    }

    /// Render a whole fragment; blocks are separated by exactly one blank line
    pub(crate) fn emit(&self, root: &DocumentNode) -> String {
        join_blocks(self.blocks(&root.children))
    }

    fn blocks(&self, nodes: &[DocumentNode]) -> Vec<Block> {
        let mut blocks = Vec::new();
        let mut inline = InlineBuffer::new();

        for node in nodes {
            if self.is_block(node) {
                self.flush_paragraph(&mut inline, &mut blocks);
                self.block(node, &mut blocks);
            } else {
                self.inline(node, &mut inline, InlineContext::Flow);
            }
        }

        self.flush_paragraph(&mut inline, &mut blocks);
        blocks
    }

    fn flush_paragraph(&self, inline: &mut InlineBuffer, blocks: &mut Vec<Block>) {
        let text = std::mem::take(inline).finish();
        if !text.is_empty() {
            blocks.push(Block::text(self.escape_starts(text)));
        }
    }

    /// Known block tags are blocks; unknown tags are blocks only when they
    /// wrap block content, so their children are never flattened into one line.
    fn is_block(&self, node: &DocumentNode) -> bool {
        match node.tag() {
            None => false,
            Some(tag) if tags::is_skipped(tag) => false,
            Some(tag) if tags::is_block(tag) => true,
            Some(tag) if tags::inline_marker(tag).is_some() => false,
            Some("a" | "br" | "code" | "img" | "input") => false,
            Some(_) => node.children.iter().any(|child| self.is_block(child)),
        }
    }

    fn block(&self, node: &DocumentNode, blocks: &mut Vec<Block>) {
        let tag = node.tag().unwrap_or_default();

        if let Some(level) = tags::heading_level(tag) {
            let text = self.inline_text(&node.children, InlineContext::Heading);
            if !text.is_empty() {
                let text = escape_heading_end(&text);
                blocks.push(Block::text(format!("{} {text}", "#".repeat(level))));
            }
            return;
        }

        match tag {
            "ul" | "ol" => {
                if let Some(list) = self.list(node) {
                    blocks.push(Block::list(list));
                }
            }
            "li" => {
                let marker = self.bullet();
                let item_blocks = self.blocks(&node.children);
                blocks.push(Block::list(self.format_item(&marker, item_blocks)));
            }
            "pre" => blocks.push(Block::text(self.code_block(node))),
            "blockquote" => {
                let inner = join_blocks(self.blocks(&node.children));
                if !inner.is_empty() {
                    blocks.push(Block::text(quote_lines(&inner)));
                }
            }
            "hr" => blocks.push(Block::text("---".to_string())),
            "table" => match self.table(node) {
                Some(table) => blocks.push(Block::text(table)),
                None => blocks.extend(self.blocks(&node.children)),
            },
            // Containers (div, section, p, figure, ...) and unknown wrappers
            _ => blocks.extend(self.blocks(&node.children)),
        }
    }

    // ----- inline content -------------------------------------------------

    fn inline_text(&self, nodes: &[DocumentNode], context: InlineContext) -> String {
        let mut buffer = InlineBuffer::new();
        for node in nodes {
            self.inline(node, &mut buffer, context);
        }
        buffer.finish()
    }

    /// Render children into a fresh buffer, leaving boundary spaces unresolved
    fn inline_run(&self, nodes: &[DocumentNode], context: InlineContext) -> String {
        let mut buffer = InlineBuffer::new();
        for node in nodes {
            self.inline(node, &mut buffer, context);
        }
        buffer.as_str().to_string()
    }

    fn inline(&self, node: &DocumentNode, buffer: &mut InlineBuffer, context: InlineContext) {
        match &node.kind {
            NodeKind::Text(text) => buffer.push_text(&self.escape(text)),
            NodeKind::Comment(_) => {}
            NodeKind::Fragment => {
                for child in &node.children {
                    self.inline(child, buffer, context);
                }
            }
            NodeKind::Element { tag, .. } => self.inline_element(tag, node, buffer, context),
        }
    }

    fn inline_element(
        &self,
        tag: &str,
        node: &DocumentNode,
        buffer: &mut InlineBuffer,
        context: InlineContext,
    ) {
        if tags::is_skipped(tag) {
            return;
        }

        if let Some(marker) = tags::inline_marker(tag) {
            let inner = self.inline_run(&node.children, context);
            let delimiter = self.delimiter(marker);
            buffer.push_wrapped(&inner, &delimiter, &delimiter);
            return;
        }

        match tag {
            "br" => match context {
                InlineContext::Flow => buffer.push_break(),
                InlineContext::Heading => buffer.push_text(" "),
                InlineContext::TableCell => buffer.push_raw("<br>"),
            },
            "code" | "kbd" | "samp" | "tt" => {
                buffer.push_raw(&code_span(&node.text_content()));
            }
            "a" => self.link(node, buffer, context),
            "img" => self.image(node, buffer),
            "input" => {
                let is_checkbox = node
                    .attr("type")
                    .is_some_and(|kind| kind.eq_ignore_ascii_case("checkbox"));
                if is_checkbox {
                    let mark = if node.attr("checked").is_some() {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    buffer.push_raw(mark);
                    buffer.push_text(" ");
                }
            }
            _ if tags::is_block(tag) => {
                // Block inside inline content (headings, table cells): keep
                // the words apart
                buffer.push_text(" ");
                for child in &node.children {
                    self.inline(child, buffer, context);
                }
                buffer.push_text(" ");
            }
            _ => {
                for child in &node.children {
                    self.inline(child, buffer, context);
                }
            }
        }
    }

    fn link(&self, node: &DocumentNode, buffer: &mut InlineBuffer, context: InlineContext) {
        let inner = self.inline_run(&node.children, context);
        let href = node
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty());

        let Some(href) = href else {
            // Anchors without a destination are plain text
            buffer.append(&inner);
            return;
        };

        let close = format!("]({}{})", escape_destination(href), self.title(node));
        if inner.trim_matches(' ').is_empty() {
            buffer.push_raw(&format!("[{}{close}", self.escape(href)));
        } else {
            buffer.push_wrapped(&inner, "[", &close);
        }
    }

    fn image(&self, node: &DocumentNode, buffer: &mut InlineBuffer) {
        let alt = node
            .attr("alt")
            .unwrap_or_default()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let src = node.attr("src").map(str::trim).filter(|src| !src.is_empty());

        match src {
            Some(src) => buffer.push_raw(&format!(
                "![{}]({}{})",
                self.escape(&alt),
                escape_destination(src),
                self.title(node)
            )),
            None => buffer.push_text(&self.escape(&alt)),
        }
    }

    fn title(&self, node: &DocumentNode) -> String {
        node.attr("title")
            .filter(|title| !title.is_empty())
            .map(|title| format!(" \"{}\"", escape_title(title)))
            .unwrap_or_default()
    }

    // ----- lists ------------------------------------------------------------

    fn list(&self, node: &DocumentNode) -> Option<String> {
        let ordered = node.is_element("ol");
        let mut number: u64 = node
            .attr("start")
            .and_then(|start| start.trim().parse::<u64>().ok())
            .map_or(1, |start| start.min(MAX_ORDERED_NUMBER));
        let mut items: Vec<String> = Vec::new();
        let mut last_indent = String::new();

        for child in &node.children {
            if child.is_whitespace() || matches!(child.kind, NodeKind::Comment(_)) {
                continue;
            }

            // A list nested directly in a list belongs to the previous item
            if child.tag().is_some_and(tags::is_list) {
                if let Some(last) = items.last_mut() {
                    if let Some(nested) = self.list(child) {
                        last.push('\n');
                        last.push_str(&indent_lines(&nested, &last_indent, false));
                    }
                    continue;
                }
            }

            let marker = self.marker(ordered, number);
            let item_blocks = if child.is_element("li") {
                self.blocks(&child.children)
            } else {
                let blocks = self.blocks(std::slice::from_ref(child));
                if blocks.is_empty() {
                    continue;
                }
                blocks
            };
            items.push(self.format_item(&marker, item_blocks));
            last_indent = self.indent(&marker);
            // Longer numbers are not list markers
            number = (number + 1).min(MAX_ORDERED_NUMBER);
        }

        if items.is_empty() {
            None
        } else {
            Some(items.join("\n"))
        }
    }

    fn format_item(&self, marker: &str, blocks: Vec<Block>) -> String {
        let Some(first) = blocks.first() else {
            return marker.to_string();
        };
        let starts_with_list = first.is_list;

        let mut body = String::new();
        for (index, block) in blocks.iter().enumerate() {
            if index > 0 {
                body.push_str(if block.is_list { "\n" } else { "\n\n" });
            }
            body.push_str(&block.markdown);
        }

        let indent = self.indent(marker);
        if starts_with_list {
            // A nested list cannot share the marker line
            format!("{marker}\n{}", indent_lines(&body, &indent, false))
        } else {
            format!("{marker} {}", indent_lines(&body, &indent, true))
        }
    }

    fn marker(&self, ordered: bool, number: u64) -> String {
        if ordered {
            format!("{number}.")
        } else {
            self.bullet()
        }
    }

    fn bullet(&self) -> String {
        self.options.bullet_marker.to_string()
    }

    /// Continuation indent for an item: `list_indent`, widened so the
    /// content still lines up after a long marker like `100.`
    fn indent(&self, marker: &str) -> String {
        " ".repeat(self.options.list_indent.max(marker.len() + 1))
    }

    // ----- code and tables --------------------------------------------------

    fn code_block(&self, node: &DocumentNode) -> String {
        let code = node.children.iter().find(|child| child.is_element("code"));
        let only_code = code.is_some()
            && node
                .children
                .iter()
                .all(|child| child.is_element("code") || child.is_whitespace());

        let language = code
            .and_then(|code| tags::language_from_classes(code.classes()))
            .or_else(|| tags::language_from_classes(node.classes()))
            .unwrap_or_default();

        let mut content = match code {
            Some(code) if only_code => code.text_content(),
            _ => node.text_content(),
        };
        if content.ends_with('\n') {
            content.pop();
        }

        let fence = code_fence(&content);
        if content.is_empty() {
            format!("{fence}{language}\n{fence}")
        } else {
            format!("{fence}{language}\n{content}\n{fence}")
        }
    }

    fn table(&self, node: &DocumentNode) -> Option<String> {
        let mut rows = Vec::new();
        self.collect_rows(node, &mut rows);

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return None;
        }
        for row in &mut rows {
            row.resize(width, String::new());
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(table_row(&rows[0]));
        lines.push(table_row(&vec!["---".to_string(); width]));
        lines.extend(rows[1..].iter().map(|row| table_row(row)));
        let table = lines.join("\n");

        let caption = node
            .children
            .iter()
            .find(|child| child.is_element("caption"))
            .map(|caption| self.inline_text(&caption.children, InlineContext::Flow))
            .filter(|caption| !caption.is_empty());

        Some(match caption {
            Some(caption) => format!("{}\n\n{table}", self.escape_starts(caption)),
            None => table,
        })
    }

    fn collect_rows(&self, node: &DocumentNode, rows: &mut Vec<Vec<String>>) {
        for child in &node.children {
            match child.tag() {
                Some("tr") => rows.push(
                    child
                        .children
                        .iter()
                        .filter(|cell| cell.is_element("td") || cell.is_element("th"))
                        .map(|cell| {
                            escape_table_cell(
                                &self.inline_text(&cell.children, InlineContext::TableCell),
                            )
                        })
                        .collect(),
                ),
                Some("thead" | "tbody" | "tfoot") => self.collect_rows(child, rows),
                _ => {}
            }
        }
    }

    // ----- escaping -------------------------------------------------------

    fn delimiter(&self, marker: InlineMarker) -> String {
        match marker {
            InlineMarker::Strong => self.options.strong_marker.clone(),
            InlineMarker::Emphasis => self.options.emphasis_marker.to_string(),
            InlineMarker::Strikethrough => "~~".to_string(),
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_markdown {
            escape_text(text)
        } else {
            text.to_string()
        }
    }

    fn escape_starts(&self, text: String) -> String {
        if self.options.escape_markdown {
            escape_line_starts(&text)
        } else {
            text
        }
    }
}

fn table_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
