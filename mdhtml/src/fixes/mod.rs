//! Post-processing fixes for Markdown -> HTML output
//!
//! The base Markdown parser produces standard HTML, which the block editor
//! does not always accept as-is. Each [`Fix`] repairs one known problem. Fixes
//! run in order over the whole HTML string; each one sees the output of the
//! previous one.
//!
//! Two kinds of fixes exist:
//!
//! - string fixes rewrite the HTML text directly (regexes, tag scanning)
//! - tree fixes parse the HTML into a [`DocumentNode`], mutate it, and
//!   serialize it back, but only when something actually changed
//!
//! Every fix must be idempotent and must return its input unchanged when it
//! cannot repair confidently. The pipeline additionally contains panics: a
//! fix that panics is skipped and the render carries on.

mod lists;
mod paragraphs;
mod tables;
mod whitespace;

use crate::dom::{parse_fragment, serialize_fragment, DocumentNode};
use crate::error::ConvertError;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Per-request information available to fixes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixContext {
    /// Whether the Markdown was parsed with the GFM extensions
    pub extension: bool,
}

/// Cheap check deciding whether a fix needs to run at all
pub type AppliesTo = fn(&str, &FixContext) -> bool;

/// The repair itself; returns its input borrowed when nothing changed
pub type Transform = for<'a> fn(&'a str, &FixContext) -> Cow<'a, str>;

/// A named HTML repair step
#[derive(Clone)]
pub struct Fix {
    pub name: Cow<'static, str>,
    pub applies_to: AppliesTo,
    pub transform: Transform,
}

impl Fix {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        applies_to: AppliesTo,
        transform: Transform,
    ) -> Self {
        Self {
            name: name.into(),
            applies_to,
            transform,
        }
    }

    /// Run the fix on `content` if its predicate accepts it
    pub fn apply<'a>(&self, content: &'a str, context: &FixContext) -> Cow<'a, str> {
        if (self.applies_to)(content, context) {
            (self.transform)(content, context)
        } else {
            Cow::Borrowed(content)
        }
    }
}

impl fmt::Debug for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fix").field("name", &self.name).finish()
    }
}

/// Run `rules` over `content` in order
///
/// A rule whose predicate rejects the current content is skipped. A rule
/// that panics is logged and its input passed on unchanged.
pub fn apply_fixes(content: &str, rules: &[Fix], context: &FixContext) -> String {
    let mut current = content.to_string();

    for fix in rules {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            match fix.apply(&current, context) {
                Cow::Owned(repaired) => Some(repaired),
                // A borrowed result is a subslice of the input
                Cow::Borrowed(output) if output.len() == current.len() => None,
                Cow::Borrowed(output) => Some(output.to_string()),
            }
        }));

        match outcome {
            Ok(Some(repaired)) => {
                if repaired != current {
                    tracing::debug!(
                        fix = %fix.name,
                        before = current.len(),
                        after = repaired.len(),
                        "fix changed output"
                    );
                    current = repaired;
                }
            }
            Ok(None) => {}
            Err(_) => {
                tracing::warn!(fix = %fix.name, "fix panicked; passing its input through unchanged");
            }
        }
    }

    current
}

/// Shared driver for tree fixes: parse, repair, and serialize only if the
/// repair reported a change
pub(crate) fn repair_tree<'a>(
    content: &'a str,
    fix_name: &str,
    repair: impl FnOnce(&mut DocumentNode) -> bool,
) -> Cow<'a, str> {
    let mut root = parse_fragment(content);
    if !repair(&mut root) {
        return Cow::Borrowed(content);
    }

    match serialize_fragment(&root) {
        Ok(html) => Cow::Owned(html),
        Err(error) => {
            tracing::warn!(
                fix = fix_name,
                %error,
                "could not serialize repaired tree; leaving input unchanged"
            );
            Cow::Borrowed(content)
        }
    }
}

struct BuiltinFix {
    name: &'static str,
    description: &'static str,
    default: bool,
    applies_to: AppliesTo,
    transform: Transform,
}

impl BuiltinFix {
    fn to_fix(&self) -> Fix {
        Fix::new(self.name, self.applies_to, self.transform)
    }
}

/// Built-in fixes; default ones listed in default order
const BUILTINS: &[BuiltinFix] = &[
    BuiltinFix {
        name: "misnested-lists",
        description: "Move lists nested directly in a list into the preceding item",
        default: true,
        applies_to: lists::has_list,
        transform: lists::misnested_lists,
    },
    BuiltinFix {
        name: "loose-list-items",
        description: "Unwrap paragraphs inside list items, joining them with line breaks",
        default: true,
        applies_to: lists::has_list_paragraph,
        transform: lists::loose_list_items,
    },
    BuiltinFix {
        name: "empty-paragraphs",
        description: "Remove paragraphs holding only whitespace or line breaks",
        default: true,
        applies_to: paragraphs::has_paragraph,
        transform: paragraphs::empty_paragraphs,
    },
    BuiltinFix {
        name: "table-figure",
        description: "Wrap tables in a figure as the block editor expects",
        default: true,
        applies_to: tables::has_table,
        transform: tables::table_figure,
    },
    BuiltinFix {
        name: "block-whitespace",
        description: "Drop whitespace between block-level tags outside <pre>",
        default: true,
        applies_to: whitespace::has_tags,
        transform: whitespace::block_whitespace,
    },
    BuiltinFix {
        name: "trim",
        description: "Trim leading and trailing whitespace",
        default: true,
        applies_to: whitespace::has_outer_whitespace,
        transform: whitespace::trim,
    },
    BuiltinFix {
        name: "unwrap-single-paragraph",
        description: "Reduce output made of a single paragraph to its inner HTML",
        default: false,
        applies_to: paragraphs::has_paragraph,
        transform: paragraphs::unwrap_single_paragraph,
    },
];

/// The rule set used when a request does not name one
pub fn default_fixes() -> Vec<Fix> {
    BUILTINS
        .iter()
        .filter(|builtin| builtin.default)
        .map(BuiltinFix::to_fix)
        .collect()
}

/// Every built-in fix, default and opt-in
pub fn builtin_fixes() -> Vec<Fix> {
    BUILTINS.iter().map(BuiltinFix::to_fix).collect()
}

/// Look up built-in fixes by name, keeping the given order
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<Fix>, ConvertError> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref().trim();
            BUILTINS
                .iter()
                .find(|builtin| builtin.name == name)
                .map(BuiltinFix::to_fix)
                .ok_or_else(|| ConvertError::UnknownFix(name.to_string()))
        })
        .collect()
}

/// Listing entry for a built-in fix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixInfo {
    pub name: &'static str,
    pub default: bool,
    pub description: &'static str,
}

pub fn fix_infos() -> Vec<FixInfo> {
    BUILTINS
        .iter()
        .map(|builtin| FixInfo {
            name: builtin.name,
            default: builtin.default,
            description: builtin.description,
        })
        .collect()
}
