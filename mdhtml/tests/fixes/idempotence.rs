//! Every built-in fix satisfies f(f(s)) == f(s)
//!
//! Inputs are random markup soups drawn from a small token alphabet per fix
//! family, plus arbitrary strings for the string fixes.

use super::fix;
use mdhtml::FixContext;
use proptest::prelude::*;

const STRING_TOKENS: &[&str] = &[
    "<p>", "</p>", "<p class=\"x\">", "<br>", "<br />", "&nbsp;", " ", "\n", "text", "<pre>",
    "</pre>", "<div>", "</div>", "<em>", "</em>", "<!-- c -->", "<",
];

const LIST_TOKENS: &[&str] = &[
    "<ul>", "</ul>", "<ol>", "</ol>", "<li>", "</li>", "<p>", "</p>", "text", " ", "\n",
];

const TABLE_TOKENS: &[&str] = &[
    "<table>", "</table>", "<tr>", "</tr>", "<td>", "</td>", "<p>", "</p>", "text", " ",
];

fn soup(tokens: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(tokens), 0..24).prop_map(|tokens| tokens.concat())
}

fn check_idempotent(name: &str, input: &str, extension: bool) -> Result<(), TestCaseError> {
    let rule = fix(name);
    let context = FixContext { extension };
    let once = rule.apply(input, &context).into_owned();
    let twice = rule.apply(&once, &context).into_owned();
    prop_assert_eq!(once, twice, "{} is not idempotent on {:?}", name, input);
    Ok(())
}

proptest! {
    #[test]
    fn string_fixes_are_idempotent_on_markup(input in soup(STRING_TOKENS), extension in any::<bool>()) {
        for name in ["empty-paragraphs", "block-whitespace", "trim", "unwrap-single-paragraph"] {
            check_idempotent(name, &input, extension)?;
        }
    }

    #[test]
    fn string_fixes_are_idempotent_on_any_text(input in ".*") {
        for name in ["empty-paragraphs", "block-whitespace", "trim", "unwrap-single-paragraph"] {
            check_idempotent(name, &input, false)?;
        }
    }

    #[test]
    fn list_fixes_are_idempotent(input in soup(LIST_TOKENS)) {
        check_idempotent("misnested-lists", &input, false)?;
        check_idempotent("loose-list-items", &input, false)?;
    }

    #[test]
    fn table_figure_is_idempotent(input in soup(TABLE_TOKENS)) {
        check_idempotent("table-figure", &input, true)?;
    }
}
