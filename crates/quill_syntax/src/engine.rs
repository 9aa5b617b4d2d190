//! Grammar rules and ordered alternation
//!
//! Every grammar element implements [`Rule`]: given a cursor, produce the cursor after the match, or fail.
//! [`Cursor::attempt`] tries a list of rules in order and commits to the first one that matches.
//!
//! ## Notes
//! - This is ordered choice, not longest match. Put longer alternatives first (`**` before `*`).
//! - Only [`NoMatch`] moves on to the next candidate. A [`FatalError`](crate::diagnostics::FatalError) is
//!   returned immediately, so a malformed construct can never be mistaken for "try something else".
//! - When every candidate fails, the aggregated [`NoMatch`] keeps the candidate failure that got furthest
//!   into the source, so a driver can report where parsing actually stalled.

use std::borrow::Cow;

use crate::cursor::Cursor;
use crate::diagnostics::{NoMatch, ParseError, ParseResult};

/// A grammar element that can parse itself from a cursor.
pub trait Rule {
    /// Name shown in "expected one of" diagnostics.
    fn name(&self) -> Cow<'static, str>;

    /// Match at `cursor`, returning the cursor after the match with the produced symbol as its last symbol.
    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor>;
}

impl Cursor {
    /// Ordered choice over `candidates`.
    ///
    /// ## Errors
    /// - The first fatal error raised by any candidate, unchanged.
    /// - A [`NoMatch`] at this cursor listing every candidate, in order, if none matched.
    pub fn attempt(&self, candidates: &[&dyn Rule]) -> ParseResult<Cursor> {
        let mut furthest: Option<NoMatch> = None;

        for rule in candidates {
            match rule.parse(self) {
                Ok(next) => {
                    tracing::trace!(
                        rule = %rule.name(),
                        line = next.line(),
                        column = next.column(),
                        "matched"
                    );
                    return Ok(next);
                }
                Err(ParseError::NoMatch(failure)) => {
                    let reached = failure.frontier().position();
                    let further = furthest
                        .as_ref()
                        .is_none_or(|best| reached > best.frontier().position());
                    if reached > self.position() && further {
                        furthest = Some(failure);
                    }
                }
                Err(fatal) => return Err(fatal),
            }
        }

        let expected: Vec<String> = candidates.iter().map(|rule| rule.name().into_owned()).collect();
        tracing::trace!(
            line = self.line(),
            column = self.column(),
            expected = ?expected,
            "no candidate matched"
        );
        Err(NoMatch {
            line: self.line(),
            column: self.column(),
            expected,
            furthest: furthest.map(Box::new),
        }
        .into())
    }

    /// Like [`Cursor::attempt`], but a [`NoMatch`] becomes `Ok(None)`.
    pub fn try_attempt(&self, candidates: &[&dyn Rule]) -> ParseResult<Option<Cursor>> {
        optional(self.attempt(candidates))
    }
}

/// Turn a soft failure into `None`, keeping fatal errors.
pub fn optional<T>(result: ParseResult<T>) -> ParseResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ParseError::NoMatch(_)) => Ok(None),
        Err(fatal) => Err(fatal),
    }
}

/// A [`NoMatch`] for `rule` at `cursor`.
pub(crate) fn no_match(cursor: &Cursor, rule: &dyn Rule) -> ParseError {
    NoMatch::expected(cursor.line(), cursor.column(), rule.name()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Span, Token, TokenKind};
    use crate::cursor::Source;
    use crate::diagnostics::{FatalError, GrammarViolation};

    /// Matches when the remaining line starts with `text`, producing an identifier token.
    struct Text(&'static str);

    impl Rule for Text {
        fn name(&self) -> Cow<'static, str> {
            Cow::Owned(format!("Text[{:?}]", self.0))
        }

        fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
            if !cursor.rest().starts_with(self.0) {
                return Err(no_match(cursor, self));
            }
            let (line, column) = cursor.position();
            let span = Span::new(line, line, column, column + self.0.len());
            Ok(cursor.advance(Token::new(TokenKind::Identifier(self.0.to_string()), span)))
        }
    }

    /// Matches `first`, then requires `second`.
    struct Pair(&'static str, &'static str);

    impl Rule for Pair {
        fn name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Pair")
        }

        fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
            let after = cursor.attempt(&[&Text(self.0)])?;
            after.attempt(&[&Text(self.1)])
        }
    }

    struct Explode;

    impl Rule for Explode {
        fn name(&self) -> Cow<'static, str> {
            Cow::Borrowed("Explode")
        }

        fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
            Err(FatalError::grammar(GrammarViolation::ExpectedVariable, cursor.line(), cursor.column()).into())
        }
    }

    fn cursor(text: &str) -> Cursor {
        Cursor::new(Source::from_text(text))
    }

    fn last_text(c: &Cursor) -> Option<String> {
        match c.last_symbol().and_then(|s| s.as_token()).map(|t| &t.kind) {
            Some(TokenKind::Identifier(name)) => Some(name.clone()),
            _ => None,
        }
    }

    #[test]
    fn test_first_match_wins() {
        let c = cursor("foobar");
        let next = c.attempt(&[&Text("foo"), &Text("foobar")]).unwrap();
        assert_eq!(last_text(&next).as_deref(), Some("foo"));
        assert_eq!(next.position(), (0, 3));
    }

    #[test]
    fn test_skips_no_match_candidates() {
        let c = cursor("bar");
        let next = c.attempt(&[&Text("foo"), &Text("bar")]).unwrap();
        assert_eq!(last_text(&next).as_deref(), Some("bar"));
    }

    #[test]
    fn test_exhausted_lists_candidates_in_order() {
        let c = cursor("baz");
        let err = c.attempt(&[&Text("foo"), &Text("bar")]).unwrap_err();
        let no_match = err.as_no_match().unwrap();
        assert_eq!(no_match.position(), (0, 0));
        assert_eq!(no_match.expected, vec!["Text[\"foo\"]", "Text[\"bar\"]"]);
        assert!(no_match.furthest.is_none());
    }

    #[test]
    fn test_fatal_error_is_not_swallowed() {
        let c = cursor("foo");
        let err = c.attempt(&[&Explode, &Text("foo")]).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_keeps_furthest_failure() {
        let c = cursor("ab");
        let err = c.attempt(&[&Pair("a", "x"), &Text("z")]).unwrap_err();
        let no_match = err.as_no_match().unwrap();
        assert_eq!(no_match.position(), (0, 0));
        assert_eq!(no_match.frontier().position(), (0, 1));
        assert_eq!(no_match.frontier().expected, vec!["Text[\"x\"]"]);
    }

    #[test]
    fn test_attempt_is_deterministic() {
        let c = cursor("foo");
        let candidates: [&dyn Rule; 2] = [&Text("bar"), &Text("foo")];
        assert_eq!(c.attempt(&candidates), c.attempt(&candidates));
    }

    #[test]
    fn test_optional_keeps_fatal() {
        let c = cursor("foo");
        assert_eq!(c.try_attempt(&[&Text("bar")]), Ok(None));
        assert!(c.try_attempt(&[&Explode]).is_err());
        assert!(c.try_attempt(&[&Text("foo")]).unwrap().is_some());
    }
}
