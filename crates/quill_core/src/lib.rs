//! Provide the canonical language vocabulary shared by the Quill parser, its diagnostics, and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - the registry of marker punctuation used by the grammar (`lang::punctuation`),
//! - layout constants for the indentation rules (`lang::layout`),
//! - the user-facing diagnostic message catalog (`lang::errors`).
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global state, and no parser types.
//! - Spellings live here so the grammar and the tests never disagree on a literal.

pub mod lang;
