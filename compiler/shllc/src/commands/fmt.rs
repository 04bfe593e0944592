//! The `fmt` command: print the canonical spelling of a term.

use shll_parse::ParseError;

use super::{run_on_file, Options, Report};

/// Parse `source` and print it back in canonical form, with a trailing
/// newline.
pub fn format_source(source: &str) -> Result<String, ParseError> {
    let term = shll_parse::parse(source)?;
    Ok(format!("{term}\n"))
}

pub fn fmt_file(path: &str, options: &Options) -> bool {
    run_on_file(path, options, |source| match format_source(source) {
        Ok(formatted) => Report::output(formatted),
        Err(err) => Report::failed(err.to_diagnostic()),
    })
}
