//! Whole-source entry points.

use std::sync::Arc;

use crate::ast::{ArgumentList, Module, Symbol};
use crate::config::ArgumentListConfig;
use crate::cursor::{Cursor, Source};
use crate::diagnostics::{NoMatch, ParseResult};
use crate::engine::Rule;
use crate::grammar::{ArgumentListRule, ModuleRule};
use crate::tokens::{Always, EndFile, MultilineWhitespace};

/// Parse the block outline of a whole source file.
///
/// ## Errors
/// - A fatal indentation error for malformed leading whitespace.
/// - A `NoMatch` if the outline cannot reach the end of the file.
#[tracing::instrument(skip_all, fields(lines = tracing::field::Empty))]
pub fn parse_outline(source: impl Into<Arc<Source>>) -> ParseResult<Module> {
    let source = source.into();
    tracing::Span::current().record("lines", source.len());

    let cursor = ModuleRule.parse(&Cursor::new(source))?;
    match cursor.into_last_symbol() {
        Some(Symbol::Module(module)) => Ok(module),
        _ => Err(NoMatch::expected(0, 0, ModuleRule.name()).into()),
    }
}

/// Parse a parameter list that spans the whole source (surrounding whitespace allowed).
///
/// ## Errors
/// - A fatal error for marker misuse or a malformed variable.
/// - A `NoMatch` at the first character that is not part of the list.
#[tracing::instrument(skip_all, fields(lines = tracing::field::Empty))]
pub fn parse_arguments(source: impl Into<Arc<Source>>, config: &ArgumentListConfig) -> ParseResult<ArgumentList> {
    let source = source.into();
    tracing::Span::current().record("lines", source.len());

    let rule = ArgumentListRule::new(*config);
    let after_list = rule.parse(&Cursor::new(source))?;
    let Some(Symbol::ArgumentList(list)) = after_list.last_symbol().cloned() else {
        return Err(NoMatch::expected(0, 0, rule.name()).into());
    };

    after_list
        .attempt(&[&MultilineWhitespace, &Always])?
        .attempt(&[&EndFile])?;
    tracing::debug!(arguments = list.len(), "parsed argument list");
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ArgumentKind;

    #[test]
    fn test_parse_outline_from_text() {
        let module = parse_outline(Source::from_text("a:\n    b\n")).unwrap();
        assert_eq!(module.to_string(), "a:\n    b");
    }

    #[test]
    fn test_parse_arguments_whole_source() {
        let list = parse_arguments(Source::from_text("a, *, b\n"), &ArgumentListConfig::default()).unwrap();
        assert_eq!(list.arguments()[1].kind(), ArgumentKind::KeywordOnly);
    }

    #[test]
    fn test_parse_arguments_rejects_trailing_text() {
        let err = parse_arguments(Source::from_text("a b"), &ArgumentListConfig::default()).unwrap_err();
        let no_match = err.as_no_match().unwrap();
        assert_eq!(no_match.position(), (0, 2));
        assert_eq!(no_match.expected, vec!["EndFile"]);
    }

    #[test]
    fn test_parse_arguments_across_lines() {
        let list = parse_arguments(Source::from_text("a,\n    b,\n"), &ArgumentListConfig::default()).unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_arguments_with_annotations_disabled() {
        let config = ArgumentListConfig::new().with_annotations(false);
        let err = parse_arguments(Source::from_text("a: int"), &config).unwrap_err();
        assert!(!err.is_fatal());
    }
}
