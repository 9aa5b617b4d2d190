//! Parameter lists: `a, /, b, *, c`, `*args`, `**kwargs`
//!
//! Grammar, one entry per iteration:
//!
//! ```text
//! entry := ["**" | "*" | "/"] [variable]
//! list  := entry ("," entry)* [","]
//! ```
//!
//! Markers and their effect on the arguments:
//! - `**name`: extra keyword argument. The name is mandatory.
//! - `*name`: extra positional argument, and opens keyword-only mode.
//! - `*`: opens keyword-only mode. Later plain arguments are keyword-only.
//! - `/`: every argument parsed so far that is not extra becomes positional-only.
//!
//! ## Notes
//! - The `/` rewrite is applied to entries already in the list, so the in-progress list is an indexable
//!   `Vec` rather than a stream of finished arguments.
//! - Entries may be separated by line breaks. A trailing comma is accepted.
//! - A missing comma ends the list without error; whatever follows is the caller's concern.
//! - Marker misuse is a fatal error at the position right after the offending marker.

use std::borrow::Cow;

use quill_core::lang::punctuation::PunctuationId;

use crate::ast::{Argument, ArgumentList, Symbol, Token, Variable};
use crate::config::ArgumentListConfig;
use crate::cursor::Cursor;
use crate::diagnostics::{FatalError, GrammarViolation, ParseError, ParseResult};
use crate::engine::{Rule, optional};
use crate::grammar::variable::{SimpleVariables, VariableGrammar};
use crate::tokens::{Always, Characters, MultilineWhitespace, matched_always};

/// Markers seen so far in one list.
#[derive(Debug, Default)]
struct Markers {
    end_position_only: bool,
    begin_keyword_only: bool,
    extra_positional: bool,
    extra_keyword: bool,
}

/// Parses a parameter list, delegating each variable to a [`VariableGrammar`].
#[derive(Clone, Copy)]
pub struct ArgumentListRule<'g> {
    grammar: &'g dyn VariableGrammar,
    config: ArgumentListConfig,
}

impl ArgumentListRule<'static> {
    /// A rule using the built-in [`SimpleVariables`] grammar.
    pub fn new(config: ArgumentListConfig) -> Self {
        Self {
            grammar: &SimpleVariables,
            config,
        }
    }
}

impl Default for ArgumentListRule<'static> {
    fn default() -> Self {
        Self::new(ArgumentListConfig::default())
    }
}

impl<'g> ArgumentListRule<'g> {
    pub fn with_grammar(grammar: &'g dyn VariableGrammar, config: ArgumentListConfig) -> Self {
        Self { grammar, config }
    }

    /// The variable right after `cursor`, if there is one.
    fn variable_at(&self, cursor: &Cursor) -> ParseResult<Option<(Variable, Cursor)>> {
        let Some(next) = optional(self.grammar.parse_variable(cursor, &self.config))? else {
            return Ok(None);
        };
        match next.last_symbol() {
            Some(Symbol::Variable(variable)) => Ok(Some((variable.clone(), next))),
            _ => Ok(None),
        }
    }
}

fn violation(kind: GrammarViolation, at: &Cursor) -> ParseError {
    FatalError::grammar(kind, at.line(), at.column()).into()
}

impl Rule for ArgumentListRule<'_> {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("ArgumentList")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let mut arguments: Vec<Argument> = Vec::new();
        let mut seen = Markers::default();
        let mut cursor = cursor.clone();

        loop {
            let entry = cursor.attempt(&[&MultilineWhitespace, &Always])?;
            let marked = entry.attempt(&[
                &Characters(PunctuationId::DoubleStar),
                &Characters(PunctuationId::Star),
                &Characters(PunctuationId::Slash),
                &Always,
            ])?;
            let variable = self.variable_at(&marked)?;
            let marker = marked
                .last_symbol()
                .and_then(Symbol::as_token)
                .and_then(Token::punctuation);

            match marker {
                Some(PunctuationId::DoubleStar) => {
                    let Some((variable, next)) = variable else {
                        return Err(violation(GrammarViolation::ExpectedVariable, &marked));
                    };
                    if seen.extra_keyword {
                        return Err(violation(GrammarViolation::MultipleExtraKeyword, &marked));
                    }
                    seen.extra_keyword = true;
                    arguments.push(Argument::extra_keyword(variable));
                    cursor = next;
                }
                Some(PunctuationId::Star) => {
                    let after = match variable {
                        Some((variable, next)) => {
                            if seen.extra_positional {
                                return Err(violation(GrammarViolation::MultipleExtraPositional, &marked));
                            }
                            seen.extra_positional = true;
                            arguments.push(Argument::extra_positional(variable));
                            next
                        }
                        None => marked.clone(),
                    };
                    if seen.begin_keyword_only {
                        return Err(violation(GrammarViolation::MultipleBeginKeywordOnly, &marked));
                    }
                    seen.begin_keyword_only = true;
                    cursor = after;
                }
                Some(PunctuationId::Slash) => {
                    if seen.begin_keyword_only {
                        return Err(violation(GrammarViolation::EndPositionOnlyAfterKeywordOnly, &marked));
                    }
                    if seen.end_position_only {
                        return Err(violation(GrammarViolation::MultipleEndPositionOnly, &marked));
                    }
                    seen.end_position_only = true;

                    for argument in arguments.iter_mut().filter(|argument| !argument.is_extra()) {
                        *argument = Argument::positional_only(argument.variable().clone());
                    }
                    cursor = marked;
                }
                _ => match variable {
                    Some((variable, next)) => {
                        arguments.push(Argument::ordinary(variable, seen.begin_keyword_only));
                        cursor = next;
                    }
                    None => break,
                },
            }

            let separator = cursor.attempt(&[&Characters(PunctuationId::Comma), &Always])?;
            if matched_always(&separator) {
                break;
            }
            cursor = separator;
        }

        tracing::trace!(arguments = arguments.len(), "parsed argument list");
        Ok(cursor.advance(ArgumentList::from_parsed(arguments)))
    }
}
