//! Core data types shared by the SHLL lexer, parser, and tooling.
//!
//! - [`Span`]: byte ranges into the source text
//! - [`Term`]: the parse tree (literals and applications)
//! - [`Visitor`]: read-only traversal with overridable hooks
//!
//! Printing a [`Term`] with `Display` produces canonical source text that
//! parses back to an equal tree.

mod print;
mod span;
mod term;
pub mod visitor;

pub use span::Span;
pub use term::{Apply, IntLit, KwArg, Radix, Term};
pub use visitor::{walk_apply, walk_kw_arg, walk_term, Visitor};
