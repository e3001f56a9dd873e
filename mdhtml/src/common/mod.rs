//! Shared tree/emission utilities for the HTML -> Markdown walk.
//!
//! Tag classification tables, whitespace normalization and escaping live here
//! so the emitter itself only decides structure.

pub mod escape;
pub mod tags;
pub mod whitespace;

pub use whitespace::{indent_lines, quote_lines, InlineBuffer, HARD_BREAK};
