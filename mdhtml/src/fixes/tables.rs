//! Table wrapping (tree fix)

use super::{repair_tree, FixContext};
use crate::dom::DocumentNode;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Class the block editor's table block puts on its figure
pub const TABLE_FIGURE_CLASS: &str = "wp-block-table";

static TABLE_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<table[\s>/]").expect("valid regex"));

pub(super) fn has_table(content: &str, _context: &FixContext) -> bool {
    TABLE_TAG.is_match(content)
}

pub(super) fn table_figure<'a>(content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    repair_tree(content, "table-figure", wrap_tables)
}

fn wrap_tables(node: &mut DocumentNode) -> bool {
    let inside_figure = node.is_element("figure");
    let mut changed = false;

    for child in &mut node.children {
        // Tables nested in cells get their own figure
        changed |= wrap_tables(child);

        if child.is_element("table") && !inside_figure {
            let table = std::mem::replace(child, DocumentNode::fragment(vec![]));
            *child = DocumentNode::element(
                "figure",
                vec![("class".to_string(), TABLE_FIGURE_CLASS.to_string())],
                vec![table],
            );
            changed = true;
        }
    }

    changed
}
