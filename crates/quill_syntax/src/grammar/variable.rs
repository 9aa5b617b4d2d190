//! Variable declarations inside parameter lists
//!
//! The parameter-list rule does not know how expressions are parsed; it asks a [`VariableGrammar`]. This
//! keeps the expression grammar (which will itself need parameter lists, for lambdas) out of the
//! parameter-list module.
//!
//! [`SimpleVariables`] is the built-in grammar: `name`, `name: <expr>`, `name = <expr>`, or
//! `name: <expr> = <expr>`, where `<expr>` is a name or an integer literal.

use crate::ast::{Expr, Symbol, TokenKind, Variable};
use crate::config::ArgumentListConfig;
use crate::cursor::Cursor;
use crate::diagnostics::{FatalError, GrammarViolation, ParseResult};
use crate::engine::{Rule, no_match};
use crate::tokens::{Always, Characters, Identifier, IntegerLiteral, matched_always};
use quill_core::lang::punctuation::PunctuationId;

/// Parses one variable declaration.
pub trait VariableGrammar {
    /// Parse a variable at `cursor`. On success the returned cursor's last symbol is a [`Symbol::Variable`].
    ///
    /// ## Errors
    /// - `NoMatch` when there is no variable at `cursor`.
    /// - A fatal error when a variable starts but is malformed.
    fn parse_variable(&self, cursor: &Cursor, config: &ArgumentListConfig) -> ParseResult<Cursor>;
}

/// The built-in variable grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleVariables;

impl SimpleVariables {
    /// `<expr>`: a name or an integer literal. `Ok(None)` when neither is present.
    fn parse_expr(cursor: &Cursor) -> ParseResult<Option<(Cursor, Expr)>> {
        let next = cursor.attempt(&[&Identifier, &IntegerLiteral, &Always])?;
        let expr = match next.last_symbol().and_then(Symbol::as_token).map(|token| &token.kind) {
            Some(TokenKind::Identifier(name)) => Expr::Name(name.clone()),
            Some(TokenKind::Integer(value)) => Expr::Integer(*value),
            _ => return Ok(None),
        };
        Ok(Some((next.advance(expr.clone()), expr)))
    }

    /// Optional `<marker> <expr>` suffix; the expression is mandatory once the marker is present.
    fn parse_suffix(
        cursor: Cursor,
        marker: PunctuationId,
        missing: GrammarViolation,
    ) -> ParseResult<(Cursor, Option<Expr>)> {
        let after_marker = cursor.attempt(&[&Characters(marker), &Always])?;
        if matched_always(&after_marker) {
            return Ok((cursor, None));
        }
        match Self::parse_expr(&after_marker)? {
            Some((next, expr)) => Ok((next, Some(expr))),
            None => Err(FatalError::grammar(missing, after_marker.line(), after_marker.column()).into()),
        }
    }
}

impl VariableGrammar for SimpleVariables {
    fn parse_variable(&self, cursor: &Cursor, config: &ArgumentListConfig) -> ParseResult<Cursor> {
        let mut next = Identifier.parse(cursor)?;
        let mut variable = match next.last_symbol().and_then(Symbol::as_token).map(|token| &token.kind) {
            Some(TokenKind::Identifier(name)) => Variable::new(name.clone()),
            _ => return Err(no_match(cursor, &Identifier)),
        };

        if config.parse_annotations {
            let (after, annotation) =
                Self::parse_suffix(next, PunctuationId::Colon, GrammarViolation::ExpectedAnnotation)?;
            next = after;
            variable.annotation = annotation;
        }

        if config.parse_initializers {
            let (after, initializer) =
                Self::parse_suffix(next, PunctuationId::Eq, GrammarViolation::ExpectedInitializer)?;
            next = after;
            variable.initializer = initializer;
        }

        Ok(next.advance(variable))
    }
}
