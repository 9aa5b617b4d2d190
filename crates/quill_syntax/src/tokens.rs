//! Leaf rules
//!
//! Each rule here matches directly against the source text at the cursor and produces a single [`Token`].
//! There is no lexer: whether `*` is a marker or `    ` is a block opener is decided by whichever grammar
//! rule asks.
//!
//! ## Notes
//! - Structural tokens ([`EndFile`], [`BlankLine`], [`EndLine`], [`BeginBlock`], [`EndBlock`]) look at the
//!   cursor position only. [`BeginBlock`] and [`EndBlock`] match at column 0 and never advance the line:
//!   each one moves the block depth by exactly one level, and a multi-level dedent is consumed by matching
//!   [`EndBlock`] again at the same position.
//! - Inline rules ([`Identifier`], [`IntegerLiteral`], [`Characters`]) skip leading inline whitespace. Their
//!   span starts at the cursor, so the skipped whitespace is part of the token.

use std::borrow::Cow;

use quill_core::lang::punctuation::{self, PunctuationId};

use crate::ast::{Span, Token, TokenKind};
use crate::cursor::Cursor;
use crate::diagnostics::{FatalError, GrammarViolation, ParseResult};
use crate::engine::{Rule, no_match};
use crate::indent::measure_block_depth;

/// Byte length of the leading inline whitespace of `text`.
fn leading_whitespace(text: &str) -> usize {
    text.len() - text.trim_start().len()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// ============================================================================
// Structural tokens
// ============================================================================

/// End of input: on (or past) the last line, at (or past) the end of its text. Zero-width.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndFile;

impl Rule for EndFile {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("EndFile")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        if line >= cursor.last_line() && column >= cursor.line_text().len() {
            Ok(cursor.advance(Token::new(TokenKind::EndFile, Span::point(line, column))))
        } else {
            Err(no_match(cursor, self))
        }
    }
}

/// An empty or whitespace-only line, at column 0. Advances to the next line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLine;

impl Rule for BlankLine {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("BlankLine")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        // Past the last real line the cursor is clamped, so a match there would not advance.
        if column != 0 || line >= cursor.source().len() || !is_blank(cursor.line_text()) {
            return Err(no_match(cursor, self));
        }
        Ok(cursor.advance(Token::new(TokenKind::BlankLine, Span::new(line, line + 1, 0, 0))))
    }
}

/// At (or past) the end of the current line's text. Advances to the next line.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndLine;

impl Rule for EndLine {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("EndLine")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        if column < cursor.line_text().len() {
            return Err(no_match(cursor, self));
        }
        Ok(cursor.advance(Token::new(TokenKind::EndLine, Span::new(line, line + 1, column, 0))))
    }
}

/// Opens one block level when the current line is indented deeper than the cursor's block depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct BeginBlock;

impl Rule for BeginBlock {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("BeginBlock")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        if column != 0 {
            return Err(no_match(cursor, self));
        }
        let depth = measure_block_depth(cursor.source(), line, cursor.block_depth())?;
        if depth <= cursor.block_depth() {
            return Err(no_match(cursor, self));
        }
        let kind = TokenKind::BeginBlock {
            block_depth: cursor.block_depth() + 1,
        };
        Ok(cursor.advance(Token::new(kind, Span::point(line, 0))))
    }
}

/// Closes one block level when the current line is indented shallower than the cursor's block depth.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndBlock;

impl Rule for EndBlock {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("EndBlock")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        if column != 0 {
            return Err(no_match(cursor, self));
        }
        let depth = measure_block_depth(cursor.source(), line, cursor.block_depth())?;
        if depth >= cursor.block_depth() {
            return Err(no_match(cursor, self));
        }
        let kind = TokenKind::EndBlock {
            block_depth: cursor.block_depth() - 1,
        };
        Ok(cursor.advance(Token::new(kind, Span::point(line, 0))))
    }
}

/// One logical line at the cursor's block depth. Captures the text after the indentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Line;

impl Rule for Line {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Line")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        let text = cursor.line_text();
        if column != 0 || line >= cursor.source().len() || is_blank(text) {
            return Err(no_match(cursor, self));
        }
        if measure_block_depth(cursor.source(), line, cursor.block_depth())? != cursor.block_depth() {
            return Err(no_match(cursor, self));
        }
        let start = cursor.source().indent(line).spaces;
        let content = text[start..].trim_end().to_string();
        Ok(cursor.advance(Token::new(TokenKind::Line(content), Span::new(line, line + 1, start, 0))))
    }
}

// ============================================================================
// Inline tokens
// ============================================================================

/// One or more whitespace characters on the current line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Whitespace;

impl Rule for Whitespace {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Whitespace")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let width = leading_whitespace(cursor.rest());
        if width == 0 {
            return Err(no_match(cursor, self));
        }
        let (line, column) = cursor.position();
        Ok(cursor.advance(Token::new(TokenKind::Whitespace, Span::new(line, line, column, column + width))))
    }
}

/// Whitespace that may run across line ends. Stops at the first non-whitespace character or the end of the
/// last line; must consume something.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultilineWhitespace;

impl Rule for MultilineWhitespace {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("MultilineWhitespace")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (mut line, mut column) = cursor.position();
        loop {
            let text = cursor.line_text_at(line);
            column += leading_whitespace(text.get(column..).unwrap_or(""));
            if column < text.len() || line >= cursor.last_line() {
                break;
            }
            line += 1;
            column = 0;
        }

        if (line, column) == cursor.position() {
            return Err(no_match(cursor, self));
        }
        let span = Span::new(cursor.line(), line, cursor.column(), column);
        Ok(cursor.advance(Token::new(TokenKind::MultilineWhitespace, span)))
    }
}

/// An ASCII identifier: `[A-Za-z_][A-Za-z0-9_]*`, after optional inline whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identifier;

impl Rule for Identifier {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Identifier")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let rest = cursor.rest();
        let skip = leading_whitespace(rest);
        let word = &rest[skip..];

        let starts_ok = word.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        if !starts_ok {
            return Err(no_match(cursor, self));
        }
        let len = word
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(word.len());

        let (line, column) = cursor.position();
        let span = Span::new(line, line, column, column + skip + len);
        Ok(cursor.advance(Token::new(TokenKind::Identifier(word[..len].to_string()), span)))
    }
}

/// A decimal integer literal, after optional inline whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerLiteral;

impl Rule for IntegerLiteral {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("IntegerLiteral")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let rest = cursor.rest();
        let skip = leading_whitespace(rest);
        let digits = &rest[skip..];
        let len = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
        if len == 0 {
            return Err(no_match(cursor, self));
        }

        let (line, column) = cursor.position();
        let value: i64 = digits[..len]
            .parse()
            .map_err(|_| FatalError::grammar(GrammarViolation::IntegerOutOfRange, line, column + skip))?;
        let span = Span::new(line, line, column, column + skip + len);
        Ok(cursor.advance(Token::new(TokenKind::Integer(value), span)))
    }
}

/// An exact punctuation spelling from the registry, after optional inline whitespace.
#[derive(Debug, Clone, Copy)]
pub struct Characters(pub PunctuationId);

impl Rule for Characters {
    fn name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("Characters['{}']", punctuation::as_str(self.0)))
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let rest = cursor.rest();
        let skip = leading_whitespace(rest);
        let spelling = punctuation::as_str(self.0);
        if !rest[skip..].starts_with(spelling) {
            return Err(no_match(cursor, self));
        }
        let (line, column) = cursor.position();
        let span = Span::new(line, line, column, column + skip + spelling.len());
        Ok(cursor.advance(Token::new(TokenKind::Punctuation(self.0), span)))
    }
}

/// Always matches, consuming nothing. The "none of these" fallback at the end of a candidate list.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl Rule for Always {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Always")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let (line, column) = cursor.position();
        Ok(cursor.advance(Token::new(TokenKind::Always, Span::point(line, column))))
    }
}

/// Return `true` if `cursor` was produced by [`Always`].
pub fn matched_always(cursor: &Cursor) -> bool {
    matches!(
        cursor.last_symbol().and_then(|symbol| symbol.as_token()),
        Some(Token {
            kind: TokenKind::Always,
            ..
        })
    )
}
