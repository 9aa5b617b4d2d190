//! Shareable metadata for `quill_core::lang` registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives in the parser.

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (e.g. a punctuation category) wrap this struct in an
/// “extension” info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub description: &'static str,
}
