//! The `explain` command: display documentation for error codes.

use shll_diagnostic::{ErrorCode, ErrorDocs};

use super::CommandError;

/// Documentation for a code given as text, e.g. `E1004` or `e1004`.
pub fn explain(code_str: &str) -> Result<&'static str, CommandError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| CommandError::UnknownCode(code_str.to_string()))?;
    ErrorDocs::get(code).ok_or(CommandError::NoDocs(code))
}

pub fn explain_error(code_str: &str) -> bool {
    match explain(code_str) {
        Ok(doc) => {
            println!("{doc}");
            true
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("Known codes:");
            for code in ErrorDocs::all_codes() {
                eprintln!("  {code}  {}", code.summary());
            }
            false
        }
    }
}
