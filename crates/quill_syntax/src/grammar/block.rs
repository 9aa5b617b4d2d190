//! Block outline: the indentation structure of a file
//!
//! This grammar recognizes only structure. Each non-blank line becomes an opaque [`BlockItem::Line`], and
//! each indented run of lines becomes a nested [`Block`].
//!
//! ```text
//! module := (BlankLine | Block | Line)* EndFile
//! block  := BeginBlock (BlankLine | Block | Line)* EndBlock
//! ```
//!
//! ## Notes
//! - [`EndBlock`] closes exactly one level and does not advance the line. After a dedent of several levels,
//!   each enclosing [`BlockRule`] sees its own `EndBlock` at the same line, innermost first.
//! - Blank lines are skipped before indentation is measured, so they never open or close a block.

use std::borrow::Cow;

use crate::ast::{Block, BlockItem, Module, Spanned, Symbol, Token, TokenKind};
use crate::cursor::Cursor;
use crate::diagnostics::ParseResult;
use crate::engine::Rule;
use crate::tokens::{BeginBlock, BlankLine, EndBlock, EndFile, Line};

/// What one step of a block/module loop matched.
enum Step {
    Skip,
    Close,
    Item(BlockItem),
}

fn classify(cursor: &Cursor) -> Step {
    match cursor.last_symbol() {
        Some(Symbol::Block(block)) => Step::Item(BlockItem::Block(block.clone())),
        Some(Symbol::Token(Token {
            kind: TokenKind::Line(text),
            span,
        })) => Step::Item(BlockItem::Line(Spanned::new(text.clone(), *span))),
        Some(Symbol::Token(Token {
            kind: TokenKind::EndBlock { .. } | TokenKind::EndFile,
            ..
        })) => Step::Close,
        _ => Step::Skip,
    }
}

/// One indented block, from its `BeginBlock` to its `EndBlock`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockRule;

impl Rule for BlockRule {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Block")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let mut cursor = cursor.attempt(&[&BeginBlock])?;
        let depth = cursor.block_depth();
        let mut items = Vec::new();

        loop {
            cursor = cursor.attempt(&[&BlankLine, &EndBlock, &BlockRule, &Line])?;
            match classify(&cursor) {
                Step::Item(item) => items.push(item),
                Step::Close => break,
                Step::Skip => {}
            }
        }

        Ok(cursor.advance(Block { depth, items }))
    }
}

/// A whole file: top-level lines and blocks up to `EndFile`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleRule;

impl Rule for ModuleRule {
    fn name(&self) -> Cow<'static, str> {
        Cow::Borrowed("Module")
    }

    fn parse(&self, cursor: &Cursor) -> ParseResult<Cursor> {
        let mut cursor = cursor.clone();
        let mut items = Vec::new();

        loop {
            cursor = cursor.attempt(&[&BlankLine, &EndFile, &BlockRule, &Line])?;
            match classify(&cursor) {
                Step::Item(item) => items.push(item),
                Step::Close => break,
                Step::Skip => {}
            }
        }

        Ok(cursor.advance(Module { items }))
    }
}
