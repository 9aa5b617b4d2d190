//! Parse errors and source-highlighted reports
//!
//! Parsing can end three ways: a new cursor (match), a [`NoMatch`] (this rule does not apply here), or a
//! [`FatalError`] (the rule applies but the construct is malformed). The two failure channels share
//! [`ParseError`] so `?` propagates both, while the alternation engine only ever recovers from `NoMatch`.
//!
//! ## Notes
//! - Every user-facing message comes from `quill_core::lang::errors`.
//! - Lines and columns are zero-based in the error values; [`ParseError::to_report`] converts them into a
//!   byte offset for `miette`.
//!
//! ## See also
//! - [`crate::engine`] for the ordered-alternation rules that produce `NoMatch`.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use quill_core::lang::errors;
use thiserror::Error;

use crate::cursor::Source;

/// Result of a parse step.
pub type ParseResult<T> = Result<T, ParseError>;

// ============================================================================
// Soft failures
// ============================================================================

/// An exhausted alternation: none of the `expected` rules matched at `(line, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("expected one of: {}", .expected.join(", "))]
#[diagnostic(code(quill::syntax::no_match))]
pub struct NoMatch {
    pub line: usize,
    pub column: usize,
    /// Rule names, in the order they were tried.
    pub expected: Vec<String>,
    /// The deepest candidate failure that got past `(line, column)`, if any.
    pub furthest: Option<Box<NoMatch>>,
}

impl NoMatch {
    pub fn new(line: usize, column: usize, expected: Vec<String>) -> Self {
        Self {
            line,
            column,
            expected,
            furthest: None,
        }
    }

    /// A single-rule failure.
    pub fn expected(line: usize, column: usize, rule: impl Into<String>) -> Self {
        Self::new(line, column, vec![rule.into()])
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Follow `furthest` to the failure that reached deepest into the source.
    pub fn frontier(&self) -> &NoMatch {
        let mut current = self;
        while let Some(next) = &current.furthest {
            current = next;
        }
        current
    }
}

// ============================================================================
// Hard failures
// ============================================================================

/// Leading-whitespace rule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndentationViolation {
    OtherWhitespace,
    ExtraSpaces,
    OverIndented,
}

impl IndentationViolation {
    pub fn message(self) -> &'static str {
        match self {
            IndentationViolation::OtherWhitespace => errors::INDENT_OTHER_WHITESPACE_MSG,
            IndentationViolation::ExtraSpaces => errors::INDENT_EXTRA_SPACES_MSG,
            IndentationViolation::OverIndented => errors::INDENT_OVER_INDENTED_MSG,
        }
    }
}

impl fmt::Display for IndentationViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Malformed-construct violations raised by grammar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammarViolation {
    MultipleExtraPositional,
    MultipleExtraKeyword,
    MultipleEndPositionOnly,
    EndPositionOnlyAfterKeywordOnly,
    MultipleBeginKeywordOnly,
    ExpectedVariable,
    ExpectedAnnotation,
    ExpectedInitializer,
    IntegerOutOfRange,
}

impl GrammarViolation {
    pub fn message(self) -> &'static str {
        match self {
            GrammarViolation::MultipleExtraPositional => errors::MULTIPLE_EXTRA_POSITIONAL_MSG,
            GrammarViolation::MultipleExtraKeyword => errors::MULTIPLE_EXTRA_KEYWORD_MSG,
            GrammarViolation::MultipleEndPositionOnly => errors::MULTIPLE_END_POSITION_ONLY_MSG,
            GrammarViolation::EndPositionOnlyAfterKeywordOnly => errors::END_POSITION_ONLY_AFTER_KEYWORD_ONLY_MSG,
            GrammarViolation::MultipleBeginKeywordOnly => errors::MULTIPLE_BEGIN_KEYWORD_ONLY_MSG,
            GrammarViolation::ExpectedVariable => errors::EXPECTED_VARIABLE_MSG,
            GrammarViolation::ExpectedAnnotation => errors::EXPECTED_ANNOTATION_MSG,
            GrammarViolation::ExpectedInitializer => errors::EXPECTED_INITIALIZER_MSG,
            GrammarViolation::IntegerOutOfRange => errors::INTEGER_OUT_OF_RANGE_MSG,
        }
    }
}

impl fmt::Display for GrammarViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A non-recoverable parse error. Never retried as "try the next alternative".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum FatalError {
    #[error("{violation}")]
    #[diagnostic(code(quill::syntax::indentation))]
    Indentation {
        violation: IndentationViolation,
        line: usize,
        column: usize,
    },

    #[error("{violation}")]
    #[diagnostic(code(quill::syntax::grammar))]
    Grammar {
        violation: GrammarViolation,
        line: usize,
        column: usize,
    },
}

impl FatalError {
    pub fn indentation(violation: IndentationViolation, line: usize, column: usize) -> Self {
        FatalError::Indentation {
            violation,
            line,
            column,
        }
    }

    pub fn grammar(violation: GrammarViolation, line: usize, column: usize) -> Self {
        FatalError::Grammar {
            violation,
            line,
            column,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FatalError::Indentation { violation, .. } => violation.message(),
            FatalError::Grammar { violation, .. } => violation.message(),
        }
    }

    pub fn position(&self) -> (usize, usize) {
        match *self {
            FatalError::Indentation { line, column, .. } | FatalError::Grammar { line, column, .. } => (line, column),
        }
    }
}

/// Either failure channel.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ParseError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    NoMatch(#[from] NoMatch),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fatal(#[from] FatalError),
}

impl ParseError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ParseError::Fatal(_))
    }

    pub fn as_no_match(&self) -> Option<&NoMatch> {
        match self {
            ParseError::NoMatch(no_match) => Some(no_match),
            ParseError::Fatal(_) => None,
        }
    }

    /// Where a driver should point: the fatal error itself, or the deepest no-match.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Fatal(fatal) => fatal.position(),
            ParseError::NoMatch(no_match) => no_match.frontier().position(),
        }
    }

    /// Build a source-highlighted report for this error.
    pub fn to_report(&self, source: &Source) -> SourceDiagnostic {
        let (line, column) = self.position();
        let offset = source.offset_of(line, column);
        let (message, code, label, help) = match self {
            ParseError::Fatal(FatalError::Indentation { violation, .. }) => (
                violation.to_string(),
                "quill::syntax::indentation",
                "here",
                Some("indent each block with exactly four spaces more than its parent".to_string()),
            ),
            ParseError::Fatal(FatalError::Grammar { violation, .. }) => {
                (violation.to_string(), "quill::syntax::grammar", "here", None)
            }
            ParseError::NoMatch(no_match) => (
                no_match.frontier().to_string(),
                "quill::syntax::no_match",
                "parsing stopped here",
                None,
            ),
        };

        SourceDiagnostic {
            message,
            code,
            src: NamedSource::new(source.name(), source.text()),
            span: SourceSpan::from((offset, 0)),
            label,
            help,
        }
    }
}

// ============================================================================
// Construction errors
// ============================================================================

/// Errors from building [`crate::ast::Argument`] / [`crate::ast::ArgumentList`] values directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{}", errors::NOT_POSITIONAL_OR_KEYWORD_MSG)]
    NeitherPositionalNorKeyword,

    #[error("{}", errors::EXTRA_BOTH_POSITIONAL_AND_KEYWORD_MSG)]
    ExtraBothPositionalAndKeyword,

    #[error("'{name}': {}", errors::CANNOT_HAVE_MULTIPLE_EXTRA_POSITIONAL_MSG)]
    MultipleExtraPositional { name: String },

    #[error("'{name}': {}", errors::CANNOT_HAVE_MULTIPLE_EXTRA_KEYWORD_MSG)]
    MultipleExtraKeyword { name: String },
}

// ============================================================================
// Reports
// ============================================================================

/// A parse error attached to its source text, ready for `miette` rendering.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceDiagnostic {
    pub message: String,
    pub code: &'static str,
    pub src: NamedSource<String>,
    pub span: SourceSpan,
    pub label: &'static str,
    pub help: Option<String>,
}

impl Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.help.as_ref().map(|help| Box::new(help) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.src)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.label.to_string()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message_lists_expected_rules() {
        let err = NoMatch::new(0, 3, vec!["Comma".to_string(), "Always".to_string()]);
        assert_eq!(err.to_string(), "expected one of: Comma, Always");
    }

    #[test]
    fn test_frontier_follows_furthest_chain() {
        let mut inner = NoMatch::expected(2, 5, "Identifier");
        inner.furthest = Some(Box::new(NoMatch::expected(3, 0, "Line")));
        let mut outer = NoMatch::expected(0, 0, "Module");
        outer.furthest = Some(Box::new(inner));

        assert_eq!(outer.frontier().position(), (3, 0));
        assert_eq!(NoMatch::expected(1, 1, "EndFile").frontier().position(), (1, 1));
    }

    #[test]
    fn test_fatal_messages_are_exact() {
        let err = FatalError::indentation(IndentationViolation::OverIndented, 1, 4);
        assert_eq!(err.to_string(), "each block must be indented four spaces (block over-indented)");
        assert_eq!(err.position(), (1, 4));

        let err = FatalError::grammar(GrammarViolation::EndPositionOnlyAfterKeywordOnly, 0, 6);
        assert_eq!(
            err.to_string(),
            "\"end position-only\" marker found after \"begin keyword-only\" marker"
        );
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: ParseError = FatalError::grammar(GrammarViolation::ExpectedVariable, 0, 2).into();
        assert!(err.is_fatal());
        assert_eq!(err.to_string(), "expected Variable");

        let err: ParseError = NoMatch::expected(0, 0, "EndFile").into();
        assert!(!err.is_fatal());
        assert!(err.as_no_match().is_some());
    }

    #[test]
    fn test_report_points_at_byte_offset() {
        let source = Source::from_text("a\n\tb").with_name("demo.qu");
        let err: ParseError = FatalError::indentation(IndentationViolation::OtherWhitespace, 1, 0).into();
        let report = err.to_report(&source);
        assert_eq!(report.span.offset(), 2);
        assert_eq!(report.code, "quill::syntax::indentation");
        assert!(report.help.is_some());
    }
}
