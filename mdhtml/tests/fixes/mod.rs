//! Built-in fix tests through the public API
//!
//! Individual repairs are unit tested next to their implementation; these
//! tests pin the behaviour callers rely on: lookup by name, predicates, and
//! idempotence.

mod idempotence;

use mdhtml::fixes::{builtin_fixes, fix_infos, resolve};
use mdhtml::{Fix, FixContext};

pub(crate) fn fix(name: &str) -> Fix {
    resolve(&[name])
        .expect("built-in fix")
        .pop()
        .expect("one fix")
}

#[test]
fn test_every_builtin_resolves() {
    for builtin in builtin_fixes() {
        let resolved = fix(&builtin.name);
        assert_eq!(resolved.name, builtin.name);
    }
}

#[test]
fn test_fix_infos_match_builtins() {
    let names: Vec<_> = fix_infos().iter().map(|info| info.name).collect();
    let builtins: Vec<_> = builtin_fixes()
        .iter()
        .map(|fix| fix.name.to_string())
        .collect();
    assert_eq!(names, builtins);
}

#[test]
fn test_resolve_trims_names() {
    let fixes = resolve(&[" trim "]).unwrap();
    assert_eq!(fixes[0].name, "trim");
}

#[test]
fn test_predicates_skip_irrelevant_content() {
    let context = FixContext::default();
    let plain = "<p>no lists or tables here</p>";

    for name in ["misnested-lists", "loose-list-items", "table-figure"] {
        let rule = fix(name);
        assert!(!(rule.applies_to)(plain, &context), "{name} should skip");
        assert_eq!(rule.apply(plain, &context), plain);
    }
}

#[test]
fn test_misnested_list_repair() {
    let output = fix("misnested-lists").apply(
        "<ul><li>one</li><ul><li>two</li></ul><li>three</li></ul>",
        &FixContext::default(),
    );
    assert_eq!(
        output,
        "<ul><li>one<ul><li>two</li></ul></li><li>three</li></ul>"
    );
}

#[test]
fn test_table_figure_repair() {
    let output = fix("table-figure").apply(
        "<table><tbody><tr><td>1</td></tr></tbody></table>",
        &FixContext::default(),
    );
    assert_eq!(
        output,
        "<figure class=\"wp-block-table\"><table><tbody><tr><td>1</td></tr></tbody></table></figure>"
    );
}

#[test]
fn test_tree_fixes_keep_template_contents() {
    let output = fix("table-figure").apply(
        "<template><b>keep</b></template><table><tbody><tr><td>1</td></tr></tbody></table>",
        &FixContext::default(),
    );
    assert_eq!(
        output,
        "<template><b>keep</b></template><figure class=\"wp-block-table\"><table><tbody><tr><td>1</td></tr></tbody></table></figure>"
    );
}
