#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod parser;
mod properties;

use crate::{parse, ParseError, SyntaxError};
use shll_ir::Term;

fn parse_ok(source: &str) -> Term {
    match parse(source) {
        Ok(term) => term,
        Err(err) => panic!("{source:?} should parse, got: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    match parse(source) {
        Ok(term) => panic!("{source:?} should fail, parsed as {term}"),
        Err(err) => err,
    }
}

fn syntax_err(source: &str) -> SyntaxError {
    match parse_err(source) {
        ParseError::Syntax(err) => err,
        ParseError::Lex(err) => panic!("{source:?} should be a syntax error, got: {err}"),
    }
}
