//! Lists: nesting, numbering, task items, block content in items

use super::md;
use insta::assert_snapshot;
use mdhtml::{HtmlToMarkdown, HtmlToMarkdownOptions};

#[test]
fn test_three_levels_indent_by_four() {
    let html = "<ul><li>one<ul><li>two<ul><li>three</li></ul></li></ul></li></ul>";
    assert_snapshot!(md(html), @"- one\n    - two\n        - three");
}

#[test]
fn test_ordered_inside_unordered() {
    assert_eq!(
        md("<ul><li>a<ol><li>x</li><li>y</li></ol></li><li>b</li></ul>"),
        "- a\n    1. x\n    2. y\n- b"
    );
}

#[test]
fn test_ordered_start() {
    assert_eq!(md("<ol start=\"7\"><li>g</li><li>h</li></ol>"), "7. g\n8. h");
}

#[test]
fn test_ordered_start_is_clamped_to_nine_digits() {
    assert_eq!(
        md("<ol start=\"18446744073709551615\"><li>a</li><li>b</li></ol>"),
        "999999999. a\n999999999. b"
    );
    assert_eq!(
        md("<ol start=\"999999999999\"><li>a</li></ol>"),
        "999999999. a"
    );
}

#[test]
fn test_invalid_start_counts_from_one() {
    assert_eq!(md("<ol start=\"-3\"><li>a</li><li>b</li></ol>"), "1. a\n2. b");
}

#[test]
fn test_long_marker_widens_nested_indent() {
    assert_eq!(
        md("<ol start=\"100\"><li>a<ul><li>b</li></ul></li></ol>"),
        "100. a\n     - b"
    );
    assert_eq!(
        md("<ol start=\"100\"><li>a</li><ul><li>b</li></ul></ol>"),
        "100. a\n     - b"
    );
}

#[test]
fn test_narrow_indent_still_fits_ordered_markers() {
    let converter = HtmlToMarkdown::new(HtmlToMarkdownOptions {
        list_indent: 2,
        ..Default::default()
    });
    assert_eq!(
        converter.render("<ol><li>a<ul><li>b</li></ul></li></ol>"),
        "1. a\n   - b"
    );
    assert_eq!(
        converter.render("<ul><li>a<ul><li>b</li></ul></li></ul>"),
        "- a\n  - b"
    );
}

#[test]
fn test_task_items() {
    let html = concat!(
        "<ul>",
        "<li><input type=\"checkbox\" checked=\"\" disabled=\"\"> done</li>",
        "<li><input type=\"checkbox\" disabled=\"\"> todo</li>",
        "</ul>"
    );
    assert_eq!(md(html), "- [x] done\n- [ ] todo");
}

#[test]
fn test_item_with_paragraphs() {
    assert_eq!(
        md("<ul><li><p>first</p><p>second</p></li></ul>"),
        "- first\n\n    second"
    );
}

#[test]
fn test_item_with_code_block() {
    assert_eq!(
        md("<ol><li>Run:<pre><code>cargo test\n</code></pre></li></ol>"),
        "1. Run:\n\n    ```\n    cargo test\n    ```"
    );
}

#[test]
fn test_list_nested_directly_in_list() {
    assert_eq!(md("<ul><li>a</li><ul><li>b</li></ul></ul>"), "- a\n    - b");
}

#[test]
fn test_list_after_paragraph() {
    assert_eq!(md("<p>Intro</p><ul><li>a</li></ul>"), "Intro\n\n- a");
}

#[test]
fn test_whitespace_between_items_is_ignored() {
    assert_eq!(
        md("<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>"),
        "- a\n- b"
    );
}
