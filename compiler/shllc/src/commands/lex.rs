//! The `lex` command: print the token stream.

use std::fmt::Write;

use shll_lexer::{tokenize_recovering, LexError, Lexer, Token};

use super::{run_on_file, Options, Report};

/// Tokenize `source` and list one token per line as `offset kind text`.
///
/// Without `trivia`, scanning skips malformed regions and every lexical
/// error is reported. With `trivia`, whitespace tokens are listed too and
/// scanning stops at the first error.
pub fn lex_source(source: &str, trivia: bool) -> Report {
    let (tokens, errors) = if trivia {
        let mut tokens = Vec::new();
        let mut errors = Vec::new();
        for item in Lexer::with_trivia(source) {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => errors.push(err),
            }
        }
        (tokens, errors)
    } else {
        tokenize_recovering(source)
    };

    let mut output = String::new();
    for token in &tokens {
        write_token(&mut output, token);
    }
    Report {
        output,
        diagnostics: errors.iter().map(LexError::to_diagnostic).collect(),
    }
}

fn write_token(out: &mut String, token: &Token<'_>) {
    let kind = format!("{:?}", token.kind);
    let _ = writeln!(out, "{:>6}  {kind:<10}  {:?}", token.offset(), token.text);
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: &Options) -> bool {
    run_on_file(path, options, |source| lex_source(source, options.trivia))
}
