//! List repairs (tree fixes)
//!
//! The block editor's list block only accepts `li` children in a list and
//! inline content inside an item.

use super::{repair_tree, FixContext};
use crate::common::tags;
use crate::dom::{DocumentNode, NodeKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static LIST_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<[uo]l[\s>/]").expect("valid regex"));
static ITEM_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<li[\s>/]").expect("valid regex"));
static PARAGRAPH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<p[\s>/]").expect("valid regex"));

pub(super) fn has_list(content: &str, _context: &FixContext) -> bool {
    LIST_TAG.is_match(content)
}

pub(super) fn has_list_paragraph(content: &str, _context: &FixContext) -> bool {
    ITEM_TAG.is_match(content) && PARAGRAPH_TAG.is_match(content)
}

// ----- misnested-lists ------------------------------------------------------

pub(super) fn misnested_lists<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    repair_tree(content, "misnested-lists", repair_lists)
}

fn repair_lists(node: &mut DocumentNode) -> bool {
    let mut changed = false;
    for child in &mut node.children {
        changed |= repair_lists(child);
    }
    if node.tag().is_some_and(tags::is_list) {
        changed |= adopt_list_children(node);
    }
    changed
}

/// Children a list may hold as they are
fn belongs_in_list(node: &DocumentNode) -> bool {
    match &node.kind {
        NodeKind::Element { tag, .. } => matches!(tag.as_str(), "li" | "script" | "template"),
        NodeKind::Comment(_) => true,
        NodeKind::Text(_) => node.is_whitespace(),
        NodeKind::Fragment => false,
    }
}

fn adopt_list_children(list: &mut DocumentNode) -> bool {
    if list.children.iter().all(belongs_in_list) {
        return false;
    }

    let children = std::mem::take(&mut list.children);
    let mut repaired: Vec<DocumentNode> = Vec::with_capacity(children.len());
    let mut stray: Vec<DocumentNode> = Vec::new();

    for child in children {
        if child.tag().is_some_and(tags::is_list) {
            flush_stray(&mut stray, &mut repaired);
            match repaired.iter_mut().rev().find(|node| node.is_element("li")) {
                Some(item) => item.children.push(child),
                None => repaired.push(DocumentNode::element("li", vec![], vec![child])),
            }
        } else if child.is_whitespace() && !stray.is_empty() {
            stray.push(child);
        } else if belongs_in_list(&child) {
            flush_stray(&mut stray, &mut repaired);
            repaired.push(child);
        } else {
            stray.push(child);
        }
    }
    flush_stray(&mut stray, &mut repaired);

    list.children = repaired;
    true
}

/// Wrap a run of stray content in its own list item
fn flush_stray(stray: &mut Vec<DocumentNode>, repaired: &mut Vec<DocumentNode>) {
    if stray.is_empty() {
        return;
    }
    let mut run = std::mem::take(stray);
    let mut trailing = Vec::new();
    while run.last().is_some_and(DocumentNode::is_whitespace) {
        trailing.extend(run.pop());
    }
    repaired.push(DocumentNode::element("li", vec![], run));
    repaired.extend(trailing.into_iter().rev());
}

// ----- loose-list-items -----------------------------------------------------

pub(super) fn loose_list_items<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    repair_tree(content, "loose-list-items", unwrap_item_paragraphs)
}

fn unwrap_item_paragraphs(node: &mut DocumentNode) -> bool {
    let mut changed = false;
    for child in &mut node.children {
        changed |= unwrap_item_paragraphs(child);
    }
    if node.is_element("li") && node.children.iter().any(|child| child.is_element("p")) {
        node.children = flatten_paragraphs(std::mem::take(&mut node.children));
        changed = true;
    }
    changed
}

/// Replace each paragraph by its content; paragraphs that directly follow
/// each other are separated by a line break
fn flatten_paragraphs(children: Vec<DocumentNode>) -> Vec<DocumentNode> {
    let mut flattened = Vec::with_capacity(children.len());
    let mut after_paragraph = false;

    for child in children {
        if child.is_whitespace() {
            continue;
        }
        if child.is_element("p") {
            if after_paragraph {
                flattened.push(DocumentNode::element("br", vec![], vec![]));
            }
            flattened.extend(child.children);
            after_paragraph = true;
        } else {
            after_paragraph = false;
            flattened.push(child);
        }
    }

    flattened
}
