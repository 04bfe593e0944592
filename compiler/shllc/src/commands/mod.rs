//! Command handlers for the `shll` CLI.
//!
//! Each submodule implements one command as a function from source text to
//! a [`Report`]. The `*_file` wrappers read the input, print the report's
//! output on stdout, and render its diagnostics on stderr.

use std::io::{self, IsTerminal, Read};

use shll_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use shll_diagnostic::{Diagnostic, ErrorCode};
use tracing::debug;

mod check;
mod explain;
mod fmt;
mod lex;
mod parse;

pub use check::{check_file, check_source};
pub use explain::{explain, explain_error};
pub use fmt::{fmt_file, format_source};
pub use lex::{lex_file, lex_source};
pub use parse::{parse_file, render_tree};

/// Path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Errors raised by the driver itself rather than by the input it reads.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("--color: {0}")]
    InvalidColor(String),
    #[error("unknown error code '{0}'")]
    UnknownCode(String),
    #[error("no documentation available for {0}")]
    NoDocs(ErrorCode),
}

/// Flags shared by the file commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    /// `lex` only: include whitespace tokens.
    pub trivia: bool,
}

/// Split command arguments into flags and positional paths.
///
/// A lone `-` is a path (standard input), not a flag.
pub fn parse_options(args: &[String]) -> Result<(Options, Vec<&str>), CommandError> {
    let mut options = Options::default();
    let mut paths = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color = value.parse().map_err(CommandError::InvalidColor)?;
        } else if arg == "--trivia" {
            options.trivia = true;
        } else if arg.starts_with('-') && arg != STDIN_PATH {
            return Err(CommandError::UnknownOption(arg.clone()));
        } else {
            paths.push(arg.as_str());
        }
    }
    Ok((options, paths))
}

/// Read a file, or standard input for [`STDIN_PATH`].
pub fn read_source(path: &str) -> Result<String, CommandError> {
    let result = if path == STDIN_PATH {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(path)
    };
    result.map_err(|source| CommandError::Read {
        path: path.to_string(),
        source,
    })
}

/// What a command produced for one input.
#[derive(Clone, Debug, Default)]
pub struct Report {
    /// Text for stdout.
    pub output: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    pub fn output(output: String) -> Self {
        Report {
            output,
            diagnostics: Vec::new(),
        }
    }

    pub fn failed(diagnostic: Diagnostic) -> Self {
        Report {
            output: String::new(),
            diagnostics: vec![diagnostic],
        }
    }

    /// Every diagnostic is an error, so any diagnostic means failure.
    pub fn is_success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Read `path`, run `command` on its contents, and print the result.
/// Returns `false` if the input could not be read or had errors.
fn run_on_file(path: &str, options: &Options, command: impl FnOnce(&str) -> Report) -> bool {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return false;
        }
    };
    debug!(path, bytes = source.len(), "read source");

    let report = command(&source);
    print!("{}", report.output);
    if report.is_success() {
        return true;
    }

    let display_path = if path == STDIN_PATH { "<stdin>" } else { path };
    let mut emitter = TerminalEmitter::stderr(options.color, io::stderr().is_terminal())
        .with_source(display_path, source);
    emitter.emit_all(&report.diagnostics);
    emitter.emit_summary(report.diagnostics.len());
    emitter.flush();
    false
}
