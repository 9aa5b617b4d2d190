#![forbid(unsafe_code)]
//! Quill compiler frontend driver
//!
//! This crate wires the `quill_syntax` parsing engine to a command-line interface. Parsing itself lives in
//! `quill_syntax`; this crate reads files, maps flags onto parser configuration and renders diagnostics.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;

pub use quill_syntax::{ArgumentListConfig, ParseError, Source, parse_arguments, parse_outline};
pub use quill_syntax::{ast, diagnostics};
