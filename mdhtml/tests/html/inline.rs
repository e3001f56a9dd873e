//! Inline elements: emphasis, links, images, code spans, escaping

use super::md;

#[test]
fn test_emphasis_markers() {
    assert_eq!(
        md("<p><strong>a</strong> <b>b</b> <em>c</em> <i>d</i> <del>e</del></p>"),
        "**a** **b** *c* *d* ~~e~~"
    );
}

#[test]
fn test_emphasis_spaces_move_outside() {
    assert_eq!(md("<p>Some<strong> bold </strong>text</p>"), "Some **bold** text");
}

#[test]
fn test_nested_emphasis() {
    assert_eq!(
        md("<p><strong>bold <em>both</em></strong></p>"),
        "**bold *both***"
    );
}

#[test]
fn test_whitespace_collapses() {
    assert_eq!(md("<p>  lots   of\n\n  space  </p>"), "lots of space");
}

#[test]
fn test_non_breaking_space_survives() {
    assert_eq!(md("<p>a&nbsp;&nbsp;b</p>"), "a\u{a0}\u{a0}b");
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(md("<p>Fish &amp; chips &lt;3</p>"), "Fish & chips \\<3");
}

#[test]
fn test_markup_in_text_is_escaped() {
    assert_eq!(
        md("<p>Type &lt;b&gt;x&lt;/b&gt; and &amp;copy; literally</p>"),
        "Type \\<b>x\\</b> and \\&copy; literally"
    );
}

#[test]
fn test_text_syntax_is_escaped() {
    assert_eq!(
        md("<p>snake_case and [brackets] and *stars*</p>"),
        "snake\\_case and \\[brackets\\] and \\*stars\\*"
    );
}

#[test]
fn test_link_with_title() {
    assert_eq!(
        md("<p>See <a href=\"https://example.com\" title=\"Ex\">the site</a>.</p>"),
        "See [the site](https://example.com \"Ex\")."
    );
}

#[test]
fn test_link_without_text_uses_href() {
    assert_eq!(
        md("<p><a href=\"https://e.com\"></a></p>"),
        "[https://e.com](https://e.com)"
    );
}

#[test]
fn test_anchor_without_href_is_text() {
    assert_eq!(md("<p><a name=\"x\">plain</a> text</p>"), "plain text");
}

#[test]
fn test_image() {
    assert_eq!(
        md("<p><img src=\"/a b.png\" alt=\"An image\" title=\"T\"></p>"),
        "![An image](/a%20b.png \"T\")"
    );
}

#[test]
fn test_image_without_src_keeps_alt() {
    assert_eq!(md("<p>x <img alt=\"missing\"> y</p>"), "x missing y");
}

#[test]
fn test_code_span_is_verbatim() {
    assert_eq!(
        md("<p>Use <code>a_b*c</code> here</p>"),
        "Use `a_b*c` here"
    );
}

#[test]
fn test_code_span_with_backticks() {
    assert_eq!(md("<p><code>a`b</code></p>"), "``a`b``");
}
