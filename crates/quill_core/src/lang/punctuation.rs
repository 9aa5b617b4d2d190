//! Punctuation vocabulary.
//!
//! This module defines the canonical set of punctuation markers used by the parameter-list grammar:
//! separators (`,`, `:`, `=`) and the argument-kind markers (`*`, `**`, `/`).
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; `from_str("***")` is `None`.
//! - This module is vocabulary only (spellings + metadata). It does not scan source text.
//!
//! ## Examples
//! ```rust
//! use quill_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(","), Some(PunctuationId::Comma));
//! assert_eq!(punctuation::as_str(PunctuationId::DoubleStar), "**");
//! ```

use super::registry::LangItemInfo;

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Separators like `,` and `:`.
    Separator,
    /// Argument-kind markers like `*`, `**` and `/`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Colon,
    Eq,

    // Argument-kind markers
    Star,
    DoubleStar,
    Slash,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub item: LangItemInfo<PunctuationId>,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(
        PunctuationId::Comma,
        ",",
        "Separates entries of a parameter list.",
        PunctuationCategory::Separator,
    ),
    info(
        PunctuationId::Colon,
        ":",
        "Introduces a parameter annotation.",
        PunctuationCategory::Separator,
    ),
    info(
        PunctuationId::Eq,
        "=",
        "Introduces a parameter default value.",
        PunctuationCategory::Separator,
    ),
    // Markers
    info(
        PunctuationId::Star,
        "*",
        "Begins keyword-only parameters; with a name, collects extra positional arguments.",
        PunctuationCategory::Marker,
    ),
    info(
        PunctuationId::DoubleStar,
        "**",
        "Collects extra keyword arguments.",
        PunctuationCategory::Marker,
    ),
    info(
        PunctuationId::Slash,
        "/",
        "Ends position-only parameters.",
        PunctuationCategory::Marker,
    ),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).item.canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// Every [`PunctuationId`] has exactly one entry; `lang_registry_guardrails` enforces it.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::Comma => &PUNCTUATION[0],
        PunctuationId::Colon => &PUNCTUATION[1],
        PunctuationId::Eq => &PUNCTUATION[2],
        PunctuationId::Star => &PUNCTUATION[3],
        PunctuationId::DoubleStar => &PUNCTUATION[4],
        PunctuationId::Slash => &PUNCTUATION[5],
    }
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.item.canonical == s).map(|p| p.item.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    description: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        item: LangItemInfo {
            id,
            canonical,
            description,
        },
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_for_matches_id() {
        for p in PUNCTUATION {
            assert_eq!(info_for(p.item.id).item.id, p.item.id);
        }
    }

    #[test]
    fn test_markers_are_categorized() {
        assert_eq!(category(PunctuationId::Star), PunctuationCategory::Marker);
        assert_eq!(category(PunctuationId::DoubleStar), PunctuationCategory::Marker);
        assert_eq!(category(PunctuationId::Slash), PunctuationCategory::Marker);
        assert_eq!(category(PunctuationId::Comma), PunctuationCategory::Separator);
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(from_str("*"), Some(PunctuationId::Star));
        assert_eq!(from_str("***"), None);
        assert_eq!(from_str(" *"), None);
    }
}
