//! The `parse` command: print the parse tree.

use std::fmt::Write;

use shll_ir::{walk_apply, walk_kw_arg, Apply, KwArg, Radix, Term, Visitor};

use super::{run_on_file, Options, Report};

/// Indentation stops growing past this many levels.
const MAX_INDENT: usize = 32;

/// Indented outline of a term, one node per line.
///
/// ```text
/// apply point
///   int 0x1F (hexadecimal 31)
///   label =
///     string "origin"
/// ```
///
/// Nodes nested deeper than [`MAX_INDENT`] levels share the deepest
/// indentation.
pub fn render_tree(term: &Term) -> String {
    let mut printer = TreePrinter::default();
    printer.visit_term(term);
    printer.out
}

#[derive(Default)]
struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        for _ in 0..self.depth.min(MAX_INDENT) {
            self.out.push_str("  ");
        }
        let _ = self.out.write_fmt(text);
        self.out.push('\n');
    }
}

impl<'ast> Visitor<'ast> for TreePrinter {
    fn visit_apply(&mut self, apply: &'ast Apply) {
        self.line(format_args!("apply {}", apply.callee));
        self.depth += 1;
        walk_apply(self, apply);
        self.depth -= 1;
    }

    fn visit_kw_arg(&mut self, kw: &'ast KwArg) {
        self.line(format_args!("{} =", kw.name));
        self.depth += 1;
        walk_kw_arg(self, kw);
        self.depth -= 1;
    }

    fn visit_atom(&mut self, term: &'ast Term) {
        match term {
            Term::Int(lit) if lit.radix() != Radix::Decimal => match lit.to_i128() {
                Some(value) => self.line(format_args!("int {lit} ({} {value})", lit.radix())),
                None => self.line(format_args!("int {lit} ({})", lit.radix())),
            },
            _ => self.line(format_args!("{} {term}", term.kind_name())),
        }
    }
}

/// Parse a file and display its tree.
pub fn parse_file(path: &str, options: &Options) -> bool {
    run_on_file(path, options, |source| match shll_parse::parse(source) {
        Ok(term) => Report::output(render_tree(&term)),
        Err(err) => Report::failed(err.to_diagnostic()),
    })
}
