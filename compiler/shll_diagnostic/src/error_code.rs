//! Error codes for SHLL diagnostics.
//!
//! The first digit names the phase: `E0xxx` for the lexer, `E1xxx` for the
//! parser.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character
    E0001,
    /// Unterminated string literal
    E0002,
    /// Unterminated character literal
    E0003,
    /// Malformed character literal
    E0004,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected a term
    E1002,
    /// Expected `=` after keyword argument name
    E1003,
    /// Unclosed argument list
    E1004,
    /// Trailing input after term
    E1005,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
        }
    }

    /// One-line summary, used in `--explain` listings.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "unterminated string literal",
            ErrorCode::E0003 => "unterminated character literal",
            ErrorCode::E0004 => "malformed character literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected a term",
            ErrorCode::E1003 => "expected `=` after keyword argument name",
            ErrorCode::E1004 => "unclosed argument list",
            ErrorCode::E1005 => "trailing input after term",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code such as `"E1001"`, case-insensitively.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
