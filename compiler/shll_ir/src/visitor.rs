//! Term Visitor
//!
//! Read-only traversal of a [`Term`] tree. Default `visit_*` methods call
//! the matching `walk_*` function, which visits children in source order
//! (positional arguments, then keyword arguments). Override a method to
//! hook a node kind, and call the `walk_*` function to keep descending.
//!
//! ```
//! use shll_ir::{walk_apply, Apply, Term, Visitor};
//!
//! struct Callees(Vec<String>);
//!
//! impl<'ast> Visitor<'ast> for Callees {
//!     fn visit_apply(&mut self, apply: &'ast Apply) {
//!         self.0.push(apply.callee.clone());
//!         walk_apply(self, apply);
//!     }
//! }
//!
//! let term = Term::apply("f", vec![Term::apply("g", vec![], vec![])], vec![]);
//! let mut callees = Callees(Vec::new());
//! callees.visit_term(&term);
//! assert_eq!(callees.0, ["f", "g"]);
//! ```

use shll_stack::ensure_sufficient_stack;

use crate::{Apply, KwArg, Term};

pub trait Visitor<'ast> {
    fn visit_term(&mut self, term: &'ast Term) {
        walk_term(self, term);
    }

    fn visit_apply(&mut self, apply: &'ast Apply) {
        walk_apply(self, apply);
    }

    fn visit_kw_arg(&mut self, kw: &'ast KwArg) {
        walk_kw_arg(self, kw);
    }

    /// Called for every leaf term (identifiers and literals).
    fn visit_atom(&mut self, _term: &'ast Term) {}
}

/// Dispatches on the term kind. Grows the stack as needed, so visitors that
/// descend through `walk_term` handle trees of any depth.
pub fn walk_term<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, term: &'ast Term) {
    ensure_sufficient_stack(|| match term {
        Term::Apply(apply) => visitor.visit_apply(apply),
        Term::Ident(_) | Term::Int(_) | Term::Decimal(_) | Term::Str(_) | Term::Char(_) => {
            visitor.visit_atom(term);
        }
    });
}

pub fn walk_apply<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, apply: &'ast Apply) {
    for arg in &apply.positional {
        visitor.visit_term(arg);
    }
    for kw in &apply.keyword {
        visitor.visit_kw_arg(kw);
    }
}

pub fn walk_kw_arg<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, kw: &'ast KwArg) {
    visitor.visit_term(&kw.value);
}
