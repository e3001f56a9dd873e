//! Block-level elements: headings, paragraphs, quotes, code, rules

use super::md;
use insta::assert_snapshot;

#[test]
fn test_heading_and_paragraph() {
    assert_snapshot!(
        md("<h2>Title</h2><p>Some <strong>bold</strong> text.</p>"),
        @"## Title\n\nSome **bold** text."
    );
}

#[test]
fn test_heading_levels() {
    assert_eq!(
        md("<h1>A</h1><h3>B</h3><h6>C</h6>"),
        "# A\n\n### B\n\n###### C"
    );
}

#[test]
fn test_heading_break_becomes_space() {
    assert_eq!(md("<h2>a<br>b</h2>"), "## a b");
}

#[test]
fn test_heading_trailing_hashes_are_escaped() {
    assert_eq!(md("<h2>Issue #</h2>"), "## Issue \\#");
    assert_eq!(md("<h3>C#</h3>"), "### C#");
}

#[test]
fn test_empty_heading_is_dropped() {
    assert_eq!(md("<h2> </h2><p>x</p>"), "x");
}

#[test]
fn test_block_editor_comments_are_dropped() {
    let html = concat!(
        "<!-- wp:heading --><h2 class=\"wp-block-heading\">Hello</h2><!-- /wp:heading -->\n\n",
        "<!-- wp:paragraph --><p>World</p><!-- /wp:paragraph -->"
    );
    assert_eq!(md(html), "## Hello\n\nWorld");
}

#[test]
fn test_non_content_elements_are_dropped() {
    assert_eq!(
        md("<style>p { color: red }</style><p>text</p><script>alert(1)</script>"),
        "text"
    );
}

#[test]
fn test_containers_become_paragraphs() {
    assert_eq!(
        md("<div>one <span>two</span></div><div>three</div>"),
        "one two\n\nthree"
    );
}

#[test]
fn test_unknown_wrapper_with_blocks() {
    assert_eq!(
        md("<custom-block><p>a</p><p>b</p></custom-block>"),
        "a\n\nb"
    );
}

#[test]
fn test_hard_break() {
    assert_eq!(md("<p>line one<br>line two</p>"), "line one\\\nline two");
}

#[test]
fn test_blockquote() {
    assert_eq!(
        md("<blockquote><p>one</p><p>two</p></blockquote>"),
        "> one\n>\n> two"
    );
}

#[test]
fn test_horizontal_rule() {
    assert_eq!(md("<p>a</p><hr><p>b</p>"), "a\n\n---\n\nb");
}

#[test]
fn test_code_block_with_language() {
    let html = "<pre><code class=\"language-rust\">fn main() {\n    println!(\"hi\");\n}\n</code></pre>";
    assert_eq!(
        md(html),
        "```rust\nfn main() {\n    println!(\"hi\");\n}\n```"
    );
}

#[test]
fn test_code_block_fence_grows_past_content() {
    assert_eq!(md("<pre>a ``` b</pre>"), "````\na ``` b\n````");
}

#[test]
fn test_line_start_syntax_is_escaped() {
    assert_eq!(
        md("<p># not heading</p><p>1. not list</p><p>- not item</p>"),
        "\\# not heading\n\n1\\. not list\n\n\\- not item"
    );
}

#[test]
fn test_no_leading_or_trailing_blank_lines() {
    let output = md("\n\n<p>a</p>\n\n<p>b</p>\n\n");
    assert_eq!(output, "a\n\nb");
}
