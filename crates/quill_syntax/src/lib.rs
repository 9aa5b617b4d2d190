//! Parsing engine for the Quill language: source cursor, leaf tokens, indentation, ordered alternation, and
//! the parameter-list and block-outline grammars.
//!
//! There is no separate lexer. Grammar rules match directly against the source text through an immutable
//! [`cursor::Cursor`], and block structure is inferred from indentation as the parser goes.
//!
//! ## Notes
//! - Parsing has three outcomes: a new cursor, a `NoMatch` (try another alternative) or a fatal error
//!   (malformed construct, never retried). See [`diagnostics`].
//! - Marker spellings and user-facing messages come from `quill_core::lang`.
//!
//! ## Examples
//! ```rust
//! use quill_syntax::{ArgumentListConfig, Source, parse_arguments};
//!
//! let list = parse_arguments(Source::from_text("a, /, b, *, c"), &ArgumentListConfig::default()).unwrap();
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_string(), "a, /, b, *, c");
//! ```
//!
//! ## See also
//! - [`engine`] for the [`engine::Rule`] trait and `Cursor::attempt`.
//! - [`grammar`] for composite rules.

pub mod api;
pub mod ast;
pub mod config;
pub mod cursor;
pub mod diagnostics;
pub mod engine;
pub mod grammar;
pub mod indent;
pub mod tokens;

pub use api::{parse_arguments, parse_outline};
pub use config::ArgumentListConfig;
pub use cursor::{Cursor, Source};
pub use diagnostics::{FatalError, NoMatch, ParseError, ParseResult};
pub use engine::Rule;
