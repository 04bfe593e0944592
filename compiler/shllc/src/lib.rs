//! Library half of the `shll` command-line tool.
//!
//! Command bodies are plain functions from source text to a [`Report`]
//! so they can be tested without touching the process environment;
//! `main.rs` only dispatches arguments.
//!
//! [`Report`]: commands::Report

pub mod commands;
pub mod tracing_setup;
