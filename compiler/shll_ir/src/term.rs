//! The SHLL parse tree.
//!
//! A [`Term`] is either an atomic literal or an application of a named
//! callee to positional and keyword arguments. Trees are plain owned data:
//! every node owns its children and nothing is shared.

use std::fmt;
use std::hash::{Hash, Hasher};

use shll_stack::ensure_sufficient_stack;

/// A parsed term.
///
/// `Clone`, `PartialEq`, `Hash` and `Debug` are written out by hand so each
/// nesting level goes through [`ensure_sufficient_stack`]. The parser
/// accepts arbitrarily deep input and these must too.
pub enum Term {
    /// A bare identifier.
    Ident(String),
    /// An integer literal, raw text preserved.
    Int(IntLit),
    /// A decimal literal, raw text preserved (`-3.25`).
    Decimal(String),
    /// A string literal with `\"` escapes resolved.
    Str(String),
    /// A character literal: the raw text between the quotes.
    Char(String),
    /// `callee(positional..., name=value...)`
    Apply(Apply),
}

impl Term {
    pub fn ident(name: impl Into<String>) -> Self {
        Term::Ident(name.into())
    }

    pub fn int(raw: impl Into<String>) -> Self {
        Term::Int(IntLit::new(raw))
    }

    pub fn decimal(raw: impl Into<String>) -> Self {
        Term::Decimal(raw.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Term::Str(value.into())
    }

    pub fn char(raw: impl Into<String>) -> Self {
        Term::Char(raw.into())
    }

    pub fn apply(callee: impl Into<String>, positional: Vec<Term>, keyword: Vec<KwArg>) -> Self {
        Term::Apply(Apply {
            callee: callee.into(),
            positional,
            keyword,
        })
    }

    /// Short lowercase name of the variant, for tree dumps and messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Ident(_) => "ident",
            Term::Int(_) => "int",
            Term::Decimal(_) => "decimal",
            Term::Str(_) => "string",
            Term::Char(_) => "char",
            Term::Apply(_) => "apply",
        }
    }
}

impl Clone for Term {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Term::Ident(name) => Term::Ident(name.clone()),
            Term::Int(lit) => Term::Int(lit.clone()),
            Term::Decimal(raw) => Term::Decimal(raw.clone()),
            Term::Str(value) => Term::Str(value.clone()),
            Term::Char(raw) => Term::Char(raw.clone()),
            Term::Apply(apply) => Term::Apply(apply.clone()),
        })
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Term::Ident(a), Term::Ident(b))
            | (Term::Decimal(a), Term::Decimal(b))
            | (Term::Str(a), Term::Str(b))
            | (Term::Char(a), Term::Char(b)) => a == b,
            (Term::Int(a), Term::Int(b)) => a == b,
            (Term::Apply(a), Term::Apply(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            std::mem::discriminant(self).hash(state);
            match self {
                Term::Ident(text) | Term::Decimal(text) | Term::Str(text) | Term::Char(text) => {
                    text.hash(state);
                }
                Term::Int(lit) => lit.hash(state),
                Term::Apply(apply) => apply.hash(state),
            }
        });
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Term::Ident(name) => f.debug_tuple("Ident").field(name).finish(),
            Term::Int(lit) => f.debug_tuple("Int").field(lit).finish(),
            Term::Decimal(raw) => f.debug_tuple("Decimal").field(raw).finish(),
            Term::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Term::Char(raw) => f.debug_tuple("Char").field(raw).finish(),
            Term::Apply(apply) => f.debug_tuple("Apply").field(apply).finish(),
        })
    }
}

/// A function application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Apply {
    pub callee: String,
    pub positional: Vec<Term>,
    pub keyword: Vec<KwArg>,
}

/// Drops nested applications with an explicit work list, so tearing down a
/// tree costs no stack per nesting level.
impl Drop for Apply {
    fn drop(&mut self) {
        let mut pending: Vec<Term> = std::mem::take(&mut self.positional);
        pending.extend(std::mem::take(&mut self.keyword).into_iter().map(|kw| kw.value));
        while let Some(term) = pending.pop() {
            if let Term::Apply(mut inner) = term {
                pending.append(&mut inner.positional);
                pending.extend(std::mem::take(&mut inner.keyword).into_iter().map(|kw| kw.value));
            }
        }
    }
}

/// A `name=value` argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KwArg {
    pub name: String,
    pub value: Term,
}

impl KwArg {
    pub fn new(name: impl Into<String>, value: Term) -> Self {
        KwArg {
            name: name.into(),
            value,
        }
    }
}

/// Base of an integer literal, determined by its prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hexadecimal",
        };
        f.write_str(name)
    }
}

/// Integer literal text exactly as written (`0x1F`, `-42`, `+0`).
///
/// The parser never evaluates integers; [`IntLit::to_i128`] gives the
/// numeric value to consumers that want it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntLit(String);

impl IntLit {
    pub fn new(raw: impl Into<String>) -> Self {
        IntLit(raw.into())
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    fn unsigned(&self) -> &str {
        self.0
            .strip_prefix(['+', '-'])
            .unwrap_or(self.0.as_str())
    }

    pub fn radix(&self) -> Radix {
        let bytes = self.unsigned().as_bytes();
        match bytes {
            [b'0', b'x' | b'X', _, ..] => Radix::Hex,
            [b'0', b'o' | b'O', _, ..] => Radix::Octal,
            [b'0', b'b' | b'B', _, ..] => Radix::Binary,
            _ => Radix::Decimal,
        }
    }

    /// Digits without sign or radix prefix.
    pub fn digits(&self) -> &str {
        let unsigned = self.unsigned();
        match self.radix() {
            Radix::Decimal => unsigned,
            _ => unsigned.get(2..).unwrap_or_default(),
        }
    }

    /// Numeric value, or `None` when the digits overflow `i128` or the
    /// text is not a well-formed integer.
    pub fn to_i128(&self) -> Option<i128> {
        let digits = self.digits();
        if digits.starts_with(['+', '-']) {
            return None;
        }
        let magnitude = i128::from_str_radix(digits, self.radix().base()).ok()?;
        if self.is_negative() {
            magnitude.checked_neg()
        } else {
            Some(magnitude)
        }
    }
}

impl fmt::Display for IntLit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
