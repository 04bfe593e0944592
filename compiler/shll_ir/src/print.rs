//! Canonical source printing for terms.
//!
//! Arguments are separated by `", "`, keyword arguments follow positional
//! ones, and no trailing comma is emitted. String values have `"` escaped
//! as `\"`. A string value ending in a backslash has no spelling that
//! survives being followed by another string literal.

use std::fmt::{self, Write};

use shll_stack::ensure_sufficient_stack;

use crate::{Apply, KwArg, Term};

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Term::Ident(name) => f.write_str(name),
            Term::Int(lit) => write!(f, "{lit}"),
            Term::Decimal(raw) => f.write_str(raw),
            Term::Str(value) => write_string(f, value),
            Term::Char(raw) => write!(f, "'{raw}'"),
            Term::Apply(apply) => write!(f, "{apply}"),
        })
    }
}

impl fmt::Display for Apply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.callee)?;
        f.write_char('(')?;
        let mut first = true;
        for arg in &self.positional {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{arg}")?;
        }
        for kw in &self.keyword {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{kw}")?;
        }
        f.write_char(')')
    }
}

impl fmt::Display for KwArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        if ch == '"' {
            f.write_str("\\\"")?;
        } else {
            f.write_char(ch)?;
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests;
