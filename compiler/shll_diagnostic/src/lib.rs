//! Diagnostic system for SHLL tooling.
//!
//! Lexer and parser errors convert into a [`Diagnostic`] carrying an
//! [`ErrorCode`], a message, labeled spans, and notes. Emitters in
//! [`emitter`] render diagnostics for humans; [`ErrorDocs`] backs
//! `--explain`.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
