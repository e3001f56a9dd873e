//! Per-request rule sets and converter configuration

use mdhtml::fixes::{default_fixes, resolve};
use mdhtml::{
    render_html_from_markdown, Fix, FixContext, MarkdownToHtml, MarkdownToHtmlOptions,
    RenderRequest,
};
use std::borrow::Cow;

fn always(_content: &str, _context: &FixContext) -> bool {
    true
}

fn mark_extension<'a>(content: &'a str, context: &FixContext) -> Cow<'a, str> {
    if context.extension && !content.starts_with("<!--gfm-->") {
        Cow::Owned(format!("<!--gfm-->{content}"))
    } else {
        Cow::Borrowed(content)
    }
}

fn explode<'a>(_content: &'a str, _context: &FixContext) -> Cow<'a, str> {
    panic!("fix failure")
}

#[test]
fn test_empty_rule_set_returns_base_html() {
    let rules: Vec<Fix> = Vec::new();
    let output = render_html_from_markdown(RenderRequest::new("- a\n- b").with_rules(&rules));
    assert_eq!(output, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
}

#[test]
fn test_opt_in_unwrap() {
    let mut rules = default_fixes();
    rules.extend(resolve(&["unwrap-single-paragraph"]).unwrap());

    let output =
        render_html_from_markdown(RenderRequest::new("Just *one* line").with_rules(&rules));
    assert_eq!(output, "Just <em>one</em> line");

    let output = render_html_from_markdown(RenderRequest::new("one\n\ntwo").with_rules(&rules));
    assert_eq!(output, "<p>one</p><p>two</p>");
}

#[test]
fn test_rule_order_is_preserved() {
    // block-whitespace never touches text after the last tag; only trim does
    let rules = resolve(&["trim", "block-whitespace"]).unwrap();
    let output = render_html_from_markdown(RenderRequest::new("a\n\nb").with_rules(&rules));
    assert_eq!(output, "<p>a</p><p>b</p>");

    let rules = resolve(&["block-whitespace"]).unwrap();
    let output = render_html_from_markdown(RenderRequest::new("a\n\nb").with_rules(&rules));
    assert_eq!(output, "<p>a</p><p>b</p>\n");
}

#[test]
fn test_custom_fix_sees_extension_flag() {
    let rules = vec![Fix::new("mark-extension", always, mark_extension)];

    let plain = render_html_from_markdown(RenderRequest::new("x").with_rules(&rules));
    assert_eq!(plain, "<p>x</p>\n");

    let gfm = render_html_from_markdown(
        RenderRequest::new("x")
            .with_rules(&rules)
            .with_extension(true),
    );
    assert_eq!(gfm, "<!--gfm--><p>x</p>\n");
}

#[test]
fn test_panicking_fix_does_not_abort_render() {
    let mut rules = vec![Fix::new("explode", always, explode)];
    rules.extend(default_fixes());

    let output = render_html_from_markdown(RenderRequest::new("- a").with_rules(&rules));
    assert_eq!(output, "<ul><li>a</li></ul>");
}

#[test]
fn test_configured_converter_defaults() {
    let converter = MarkdownToHtml::new(MarkdownToHtmlOptions {
        extension: true,
        hard_breaks: false,
        ..Default::default()
    });
    assert_eq!(converter.render("~~a~~\nb"), "<p><del>a</del>\nb</p>");

    // A request can still turn the extension off
    let request = RenderRequest::new("~~a~~").with_extension(false);
    assert_eq!(converter.render_request(&request), "<p>~~a~~</p>");
}

#[test]
fn test_unknown_rule_name() {
    let error = resolve(&["trim", "sparkle"]).unwrap_err();
    assert_eq!(error.to_string(), "Unknown fix 'sparkle'");
}
