//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI colors. When a
//! source file is attached, labels are rendered as `path:line:col` with
//! the offending line and a caret underline; otherwise raw byte spans are
//! printed.

use std::io::{self, Write};

use shll_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when the output is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always, or never)"
            )),
        }
    }
}

struct SourceFile {
    path: String,
    text: String,
    lines: LineOffsetTable,
}

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceFile>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source the diagnostics refer to, enabling snippets.
    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        self.source = Some(SourceFile {
            path: path.into(),
            lines: LineOffsetTable::build(&text),
            text,
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn label_color(label: &Label) -> &'static str {
        if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        }
    }

    fn write_label_plain(&mut self, label: &Label) {
        let marker = if label.is_primary { "-->" } else { "   " };
        let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
        self.write_colored(&label.message, Self::label_color(label));
        let _ = writeln!(self.writer);
    }

    fn write_label_snippet(&mut self, label: &Label) {
        let Some(source) = self.source.take() else {
            self.write_label_plain(label);
            return;
        };

        let (line, col) = source.lines.line_col(&source.text, label.span.start);
        let line_text = source.lines.line_text(&source.text, line);
        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let underline = underline_for(label.span, col, line_text, label.is_primary);

        let _ = writeln!(self.writer, "{pad}--> {}:{line}:{col}", source.path);
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{pad} | ");
        self.write_colored(
            &format!("{underline} {}", label.message),
            Self::label_color(label),
        );
        let _ = writeln!(self.writer);

        self.source = Some(source);
    }
}

/// Indentation plus `^` (primary) or `-` (secondary) markers under the
/// characters covered by `span` on its first line. Empty spans get one marker.
fn underline_for(span: Span, col: u32, line_text: &str, primary: bool) -> String {
    let marker = if primary { '^' } else { '-' };
    let indent = (col as usize).saturating_sub(1);
    let span_bytes = span.len() as usize;
    let rest = line_text
        .char_indices()
        .nth(indent)
        .and_then(|(start, _)| line_text.get(start..))
        .unwrap_or_default();
    let width = rest
        .char_indices()
        .take_while(|(i, _)| *i < span_bytes)
        .count()
        .max(1);

    let mut out = " ".repeat(indent);
    out.extend(std::iter::repeat(marker).take(width));
    out
}

impl TerminalEmitter<io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            if self.source.is_some() {
                self.write_label_snippet(label);
            } else {
                self.write_label_plain(label);
            }
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        let what = match error_count {
            0 => return,
            1 => "previous error".to_string(),
            n => format!("{n} previous errors"),
        };
        self.write_colored("error", colors::ERROR);
        let _ = writeln!(self.writer, ": aborting due to {what}");
    }
}
