//! Quill language vocabulary registries.
//!
//! This module is the “front door” for language-level vocabulary: the punctuation markers the grammar recognizes,
//! the layout rules, and the diagnostic messages users see.
//!
//! The design goal is to avoid stringly-typed checks scattered across the parser. Callers work with **stable IDs**
//! (e.g. `PunctuationId`) and look up spellings/metadata via registry tables.
//!
//! ## Examples
//! ```rust
//! use quill_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("**"), Some(PunctuationId::DoubleStar));
//! assert_eq!(punctuation::as_str(PunctuationId::Slash), "/");
//! ```

pub mod errors;
pub mod layout;
pub mod punctuation;
pub mod registry;
