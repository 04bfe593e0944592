//! The `check` command: validate without printing.

use super::{run_on_file, Options, Report};

pub fn check_source(source: &str) -> Report {
    match shll_parse::parse(source) {
        Ok(_) => Report::default(),
        Err(err) => Report::failed(err.to_diagnostic()),
    }
}

/// Parse a file, reporting the first error. Succeeds silently.
pub fn check_file(path: &str, options: &Options) -> bool {
    run_on_file(path, options, check_source)
}
