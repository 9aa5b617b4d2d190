//! Source text and the immutable parse cursor
//!
//! A [`Cursor`] is a position in a [`Source`]: line, column, the block depth in effect, and the symbol that
//! was matched to get there. Every successful match produces a *new* cursor; backtracking is just reusing an
//! older one.
//!
//! ## Notes
//! - The source is shared behind an `Arc`, so cloning a cursor is cheap.
//! - The line index may sit one past the last real line, so a final line without a trailing newline can
//!   still be consumed.
//!
//! ## Examples
//! ```rust
//! use quill_syntax::cursor::{Cursor, Source};
//!
//! let cursor = Cursor::new(Source::from_text("foo\nbar"));
//! assert_eq!(cursor.position(), (0, 0));
//! assert_eq!(cursor.line_text(), "foo");
//! assert_eq!(cursor.last_line(), 1);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::ast::Symbol;
use crate::indent::LineIndent;

/// Display name used when a source is not read from a file.
pub const DEFAULT_SOURCE_NAME: &str = "<source>";

/// The lines of one source file, with their leading whitespace pre-scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    lines: Vec<String>,
    indents: Vec<LineIndent>,
}

impl Source {
    /// Build a source from lines without line terminators.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let indents = lines.iter().map(|line| LineIndent::scan(line)).collect();
        Self {
            name: DEFAULT_SOURCE_NAME.to_string(),
            lines,
            indents,
        }
    }

    /// Split `text` into lines (`\n` or `\r\n`); a trailing newline does not add an empty line.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last real line (0 for an empty source).
    pub fn last_line(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Text of `line`, or `""` past the end.
    pub fn line(&self, line: usize) -> &str {
        self.lines.get(line).map(String::as_str).unwrap_or("")
    }

    /// Pre-scanned indentation of `line`; lines past the end are unindented.
    pub fn indent(&self, line: usize) -> LineIndent {
        self.indents.get(line).copied().unwrap_or_default()
    }

    /// The whole text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Byte offset of `(line, column)` in [`Source::text`], clamped to the text.
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let before: usize = self.lines.iter().take(line).map(|l| l.len() + 1).sum();
        match self.lines.get(line) {
            Some(text) => before + column.min(text.len()),
            None => before.saturating_sub(1),
        }
    }
}

/// Immutable parse position.
#[derive(Clone, PartialEq, Eq)]
pub struct Cursor {
    source: Arc<Source>,
    line: usize,
    column: usize,
    block_depth: usize,
    last_symbol: Option<Arc<Symbol>>,
}

impl Cursor {
    /// A cursor at the start of `source`, depth 0, nothing matched yet.
    pub fn new(source: impl Into<Arc<Source>>) -> Self {
        Self {
            source: source.into(),
            line: 0,
            column: 0,
            block_depth: 0,
            last_symbol: None,
        }
    }

    /// Same cursor, moved to `(line, column)`.
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    /// Same cursor, with `block_depth` in effect.
    pub fn with_block_depth(mut self, block_depth: usize) -> Self {
        self.block_depth = block_depth;
        self
    }

    pub fn source(&self) -> &Arc<Source> {
        &self.source
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub fn block_depth(&self) -> usize {
        self.block_depth
    }

    pub fn last_line(&self) -> usize {
        self.source.last_line()
    }

    /// Text of the current line (`""` past the end).
    pub fn line_text(&self) -> &str {
        self.source.line(self.line)
    }

    pub fn line_text_at(&self, line: usize) -> &str {
        self.source.line(line)
    }

    /// Remainder of the current line from the cursor's column.
    pub fn rest(&self) -> &str {
        self.line_text().get(self.column..).unwrap_or("")
    }

    pub fn last_symbol(&self) -> Option<&Symbol> {
        self.last_symbol.as_deref()
    }

    pub fn into_last_symbol(self) -> Option<Symbol> {
        self.last_symbol.map(Arc::unwrap_or_clone)
    }

    /// Step past `symbol`.
    ///
    /// Tokens move the cursor to the end of their span, and Begin/End-Block tokens also set the block depth.
    /// Composite symbols keep the position. The line never goes past `last_line() + 1`.
    pub fn advance(&self, symbol: impl Into<Symbol>) -> Cursor {
        let symbol = symbol.into();
        let (mut line, mut column, mut block_depth) = (self.line, self.column, self.block_depth);

        if let Symbol::Token(token) = &symbol {
            line = token.span.next_line;
            column = token.span.next_column;
            if let Some(depth) = token.block_depth() {
                block_depth = depth;
            }
        }

        Cursor {
            source: Arc::clone(&self.source),
            line: line.min(self.last_line() + 1),
            column,
            block_depth,
            last_symbol: Some(Arc::new(symbol)),
        }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("source", &self.source.name())
            .field("line", &self.line)
            .field("column", &self.column)
            .field("block_depth", &self.block_depth)
            .field("last_symbol", &self.last_symbol)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, Span, Token, TokenKind};

    fn cursor(lines: &[&str]) -> Cursor {
        Cursor::new(Source::new(lines.iter().copied()))
    }

    #[test]
    fn test_new_starts_at_origin() {
        let c = cursor(&["foo"]);
        assert_eq!(c.position(), (0, 0));
        assert_eq!(c.block_depth(), 0);
        assert!(c.last_symbol().is_none());
    }

    #[test]
    fn test_advance_token_moves_to_span_end() {
        let c = cursor(&["foo", "bar"]);
        let token = Token::new(TokenKind::Identifier("foo".to_string()), Span::new(0, 1, 0, 2));
        let next = c.advance(token.clone());
        assert_eq!(next.position(), (1, 2));
        assert_eq!(next.last_symbol(), Some(&Symbol::Token(token)));
        // the original cursor is untouched
        assert_eq!(c.position(), (0, 0));
    }

    #[test]
    fn test_advance_clamps_past_last_line() {
        let c = cursor(&["foo", "bar"]);
        let token = Token::new(TokenKind::EndLine, Span::new(0, 5, 0, 0));
        assert_eq!(c.advance(token).line(), 2);
    }

    #[test]
    fn test_advance_block_tokens_set_depth() {
        let c = cursor(&["    foo"]);
        let begin = Token::new(TokenKind::BeginBlock { block_depth: 1 }, Span::point(0, 0));
        let inside = c.advance(begin);
        assert_eq!(inside.block_depth(), 1);
        assert_eq!(inside.position(), (0, 0));

        let end = Token::new(TokenKind::EndBlock { block_depth: 0 }, Span::point(0, 0));
        assert_eq!(inside.advance(end).block_depth(), 0);
    }

    #[test]
    fn test_advance_composite_keeps_position() {
        let c = cursor(&["foo"]).at(0, 2).with_block_depth(1);
        let next = c.advance(Expr::Integer(1));
        assert_eq!(next.position(), (0, 2));
        assert_eq!(next.block_depth(), 1);
        assert_eq!(next.into_last_symbol(), Some(Symbol::Expr(Expr::Integer(1))));
    }

    #[test]
    fn test_line_text_past_end_is_empty() {
        let c = cursor(&["foo"]).at(1, 0);
        assert_eq!(c.line_text(), "");
        assert_eq!(c.rest(), "");
        assert_eq!(cursor(&["foo"]).at(0, 1).rest(), "oo");
    }

    #[test]
    fn test_empty_source() {
        let c = Cursor::new(Source::from_text(""));
        assert_eq!(c.last_line(), 0);
        assert_eq!(c.line_text(), "");
    }

    #[test]
    fn test_offset_of() {
        let source = Source::from_text("ab\ncd\n");
        assert_eq!(source.len(), 2);
        assert_eq!(source.offset_of(0, 1), 1);
        assert_eq!(source.offset_of(1, 0), 3);
        assert_eq!(source.offset_of(1, 9), 5);
        assert_eq!(source.offset_of(2, 0), 5);
    }
}
