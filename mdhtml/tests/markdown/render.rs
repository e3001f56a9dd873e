//! Rendering with the default converter and rule set

use super::html;
use mdhtml::{render_html_from_markdown, RenderRequest};

#[test]
fn test_simple_list() {
    assert_eq!(
        html("- item one\n- item two"),
        "<ul><li>item one</li><li>item two</li></ul>"
    );
}

#[test]
fn test_heading_and_paragraph() {
    assert_eq!(
        html("## Title\n\nSome **bold** text."),
        "<h2>Title</h2><p>Some <strong>bold</strong> text.</p>"
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(html(""), "");
    assert_eq!(html("\n\n"), "");
}

#[test]
fn test_three_level_list() {
    assert_eq!(
        html("- a\n    - b\n        - c"),
        "<ul><li>a<ul><li>b<ul><li>c</li></ul></li></ul></li></ul>"
    );
}

#[test]
fn test_loose_list_is_tightened() {
    assert_eq!(
        html("- one\n\n- two\n\n  still two"),
        "<ul><li>one</li><li>two<br>still two</li></ul>"
    );
}

#[test]
fn test_soft_breaks_are_hard() {
    assert_eq!(
        html("line one\nline two"),
        "<p>line one<br />\nline two</p>"
    );
}

#[test]
fn test_code_block_keeps_newlines() {
    assert_eq!(
        html("```rust\nfn main() {}\n```"),
        "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>"
    );
}

#[test]
fn test_raw_html_passes_through() {
    assert_eq!(
        html("<div class=\"note\">Hi</div>"),
        "<div class=\"note\">Hi</div>"
    );
}

#[test]
fn test_empty_raw_paragraph_is_removed() {
    assert_eq!(
        html("Hello\n\n<p>&nbsp;</p>\n\nWorld"),
        "<p>Hello</p><p>World</p>"
    );
}

#[test]
fn test_gfm_needs_extension() {
    let source = "~~gone~~";
    assert_eq!(html(source), "<p>~~gone~~</p>");
    assert_eq!(
        render_html_from_markdown(RenderRequest::new(source).with_extension(true)),
        "<p><del>gone</del></p>"
    );
}

#[test]
fn test_table_is_wrapped_in_figure() {
    let output = render_html_from_markdown(
        RenderRequest::new("| a | b |\n| --- | --- |\n| 1 | 2 |").with_extension(true),
    );
    assert!(output.starts_with("<figure class=\"wp-block-table\"><table><thead><tr><th>a</th>"));
    assert!(output.ends_with("</table></figure>"));
    assert!(!output.contains('\n'));
}

#[test]
fn test_rendering_is_deterministic() {
    let source = "# T\n\n- a\n  - b\n\n> quote\n\n1. x\n2. y";
    assert_eq!(html(source), html(source));
}
