//! Syntax tree definitions for Quill
//!
//! This module defines every node the parser can produce: leaf [`Token`]s with exact spans, and the
//! composite symbols built from them (variables, parameter lists, blocks).
//!
//! ## Notes
//! - All values are immutable snapshots built once at parse time. A node that “changes” is replaced.
//! - Lines and columns are zero-based; columns are byte offsets into the line text.

use std::fmt;

use quill_core::lang::layout;
use quill_core::lang::punctuation::{self, PunctuationId};

use crate::diagnostics::ArgumentError;

/// Source span of a token: `(first_line, first_column)` up to, not including, `(next_line, next_column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub first_line: usize,
    pub next_line: usize,
    pub first_column: usize,
    pub next_column: usize,
}

impl Span {
    pub fn new(first_line: usize, next_line: usize, first_column: usize, next_column: usize) -> Self {
        Self {
            first_line,
            next_line,
            first_column,
            next_column,
        }
    }

    /// A zero-width span at `(line, column)`.
    pub fn point(line: usize, column: usize) -> Self {
        Self::new(line, line, column, column)
    }

    /// Return `true` if the span does not cover any text.
    pub fn is_empty(&self) -> bool {
        self.first_line == self.next_line && self.first_column == self.next_column
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier
pub type Ident = String;

// ============================================================================
// Tokens
// ============================================================================

/// Kinds of leaf tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    EndFile,
    BlankLine,
    EndLine,
    /// Opens one block level; `block_depth` is the depth *after* the token.
    BeginBlock { block_depth: usize },
    /// Closes one block level; `block_depth` is the depth *after* the token.
    EndBlock { block_depth: usize },
    Whitespace,
    MultilineWhitespace,
    Identifier(Ident),
    Integer(i64),
    Punctuation(PunctuationId),
    /// Zero-width fallback that always matches.
    Always,
    /// The content of one logical line, without its indentation.
    Line(String),
}

/// A leaf symbol carrying its exact source span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation(&self) -> Option<PunctuationId> {
        match self.kind {
            TokenKind::Punctuation(id) => Some(id),
            _ => None,
        }
    }

    /// Return the block depth set by a Begin/End-Block token.
    pub fn block_depth(&self) -> Option<usize> {
        match self.kind {
            TokenKind::BeginBlock { block_depth } | TokenKind::EndBlock { block_depth } => Some(block_depth),
            _ => None,
        }
    }
}

// ============================================================================
// Expressions and variables
// ============================================================================

/// Expressions usable as annotations and default values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Name(Ident),
    Integer(i64),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Integer(value) => write!(f, "{}", value),
        }
    }
}

/// A declared variable: a name with an optional annotation and an optional initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: Ident,
    pub annotation: Option<Expr>,
    pub initializer: Option<Expr>,
}

impl Variable {
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            annotation: None,
            initializer: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Expr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_initializer(mut self, initializer: Expr) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(annotation) = &self.annotation {
            write!(f, ": {}", annotation)?;
        }
        if let Some(initializer) = &self.initializer {
            write!(f, " = {}", initializer)?;
        }
        Ok(())
    }
}

// ============================================================================
// Parameter lists
// ============================================================================

/// How a declared parameter may be passed, derived from its facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    PositionalOnly,
    PositionalOrKeyword,
    KeywordOnly,
    ExtraPositional,
    ExtraKeyword,
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgumentKind::PositionalOnly => "positional-only",
            ArgumentKind::PositionalOrKeyword => "positional-or-keyword",
            ArgumentKind::KeywordOnly => "keyword-only",
            ArgumentKind::ExtraPositional => "extra positional",
            ArgumentKind::ExtraKeyword => "extra keyword",
        };
        write!(f, "{}", name)
    }
}

/// One declared parameter.
///
/// The three facets are independent: an ordinary parameter is positional *and* keyword, `*args` is
/// positional + extra, `**kwargs` is keyword + extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    variable: Variable,
    is_positional: bool,
    is_keyword: bool,
    is_extra: bool,
}

impl Argument {
    /// Build an argument from explicit facets.
    ///
    /// ## Errors
    /// - [`ArgumentError::NeitherPositionalNorKeyword`] if both `is_positional` and `is_keyword` are false.
    /// - [`ArgumentError::ExtraBothPositionalAndKeyword`] for an extra argument that is both.
    pub fn new(variable: Variable, is_positional: bool, is_keyword: bool, is_extra: bool) -> Result<Self, ArgumentError> {
        if !is_positional && !is_keyword {
            return Err(ArgumentError::NeitherPositionalNorKeyword);
        }
        if is_extra && is_positional && is_keyword {
            return Err(ArgumentError::ExtraBothPositionalAndKeyword);
        }
        Ok(Self {
            variable,
            is_positional,
            is_keyword,
            is_extra,
        })
    }

    pub(crate) fn ordinary(variable: Variable, keyword_only: bool) -> Self {
        Self {
            variable,
            is_positional: !keyword_only,
            is_keyword: true,
            is_extra: false,
        }
    }

    pub(crate) fn positional_only(variable: Variable) -> Self {
        Self {
            variable,
            is_positional: true,
            is_keyword: false,
            is_extra: false,
        }
    }

    pub(crate) fn extra_positional(variable: Variable) -> Self {
        Self {
            variable,
            is_positional: true,
            is_keyword: false,
            is_extra: true,
        }
    }

    pub(crate) fn extra_keyword(variable: Variable) -> Self {
        Self {
            variable,
            is_positional: false,
            is_keyword: true,
            is_extra: true,
        }
    }

    pub fn variable(&self) -> &Variable {
        &self.variable
    }

    pub fn name(&self) -> &str {
        &self.variable.name
    }

    pub fn is_positional(&self) -> bool {
        self.is_positional
    }

    pub fn is_keyword(&self) -> bool {
        self.is_keyword
    }

    pub fn is_extra(&self) -> bool {
        self.is_extra
    }

    pub fn kind(&self) -> ArgumentKind {
        match (self.is_positional, self.is_keyword, self.is_extra) {
            (true, _, true) => ArgumentKind::ExtraPositional,
            (false, _, true) => ArgumentKind::ExtraKeyword,
            (true, true, false) => ArgumentKind::PositionalOrKeyword,
            (true, false, false) => ArgumentKind::PositionalOnly,
            (false, _, false) => ArgumentKind::KeywordOnly,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            ArgumentKind::ExtraPositional => write!(f, "{}", punctuation::as_str(PunctuationId::Star))?,
            ArgumentKind::ExtraKeyword => write!(f, "{}", punctuation::as_str(PunctuationId::DoubleStar))?,
            _ => {}
        }
        write!(f, "{}", self.variable)
    }
}

/// An ordered parameter list. Order is the declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentList {
    arguments: Vec<Argument>,
}

impl ArgumentList {
    /// Build a list from already-constructed arguments.
    ///
    /// ## Errors
    /// Returns an [`ArgumentError`] naming the second extra positional or the second extra keyword
    /// argument, if the list holds more than one of either.
    pub fn new(arguments: Vec<Argument>) -> Result<Self, ArgumentError> {
        let second = |kind| {
            arguments
                .iter()
                .filter(|a| a.kind() == kind)
                .nth(1)
                .map(|a| a.name().to_string())
        };
        if let Some(name) = second(ArgumentKind::ExtraPositional) {
            return Err(ArgumentError::MultipleExtraPositional { name });
        }
        if let Some(name) = second(ArgumentKind::ExtraKeyword) {
            return Err(ArgumentError::MultipleExtraKeyword { name });
        }
        Ok(Self { arguments })
    }

    pub(crate) fn from_parsed(arguments: Vec<Argument>) -> Self {
        Self { arguments }
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Argument> {
        self.arguments.iter()
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn extra_positional(&self) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.kind() == ArgumentKind::ExtraPositional)
    }

    pub fn extra_keyword(&self) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.kind() == ArgumentKind::ExtraKeyword)
    }

    pub fn positional_only(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|a| a.kind() == ArgumentKind::PositionalOnly)
    }

    pub fn keyword_only(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter().filter(|a| a.kind() == ArgumentKind::KeywordOnly)
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a Argument;
    type IntoIter = std::slice::Iter<'a, Argument>;

    fn into_iter(self) -> Self::IntoIter {
        self.arguments.iter()
    }
}

impl fmt::Display for ArgumentList {
    /// Render back to declaration syntax, re-inserting the `/` and bare `*` markers.
    ///
    /// Markers are rebuilt from the argument kinds, so a marker that changed no argument is not
    /// rendered: `/, a` renders as `a` and `a, *` renders as `a`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_positional_only = self
            .arguments
            .iter()
            .rposition(|a| a.kind() == ArgumentKind::PositionalOnly);
        let mut parts: Vec<String> = Vec::with_capacity(self.arguments.len() + 2);
        let mut keyword_only_open = false;

        for (i, argument) in self.arguments.iter().enumerate() {
            match argument.kind() {
                ArgumentKind::KeywordOnly if !keyword_only_open => {
                    parts.push(punctuation::as_str(PunctuationId::Star).to_string());
                    keyword_only_open = true;
                }
                ArgumentKind::ExtraPositional => keyword_only_open = true,
                _ => {}
            }
            parts.push(argument.to_string());
            if Some(i) == last_positional_only {
                parts.push(punctuation::as_str(PunctuationId::Slash).to_string());
            }
        }

        write!(f, "{}", parts.join(", "))
    }
}

// ============================================================================
// Block outline
// ============================================================================

/// One entry of a block: a logical line or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockItem {
    Line(Spanned<String>),
    Block(Block),
}

/// An indented block. `depth` is the block depth of its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub depth: usize,
    pub items: Vec<BlockItem>,
}

/// The block outline of a whole file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Module {
    pub items: Vec<BlockItem>,
}

impl Module {
    /// Return every logical line in source order, paired with its block depth.
    pub fn lines(&self) -> Vec<(usize, &Spanned<String>)> {
        let mut out = Vec::new();
        collect_lines(&self.items, 0, &mut out);
        out
    }
}

fn collect_lines<'a>(items: &'a [BlockItem], depth: usize, out: &mut Vec<(usize, &'a Spanned<String>)>) {
    for item in items {
        match item {
            BlockItem::Line(line) => out.push((depth, line)),
            BlockItem::Block(block) => collect_lines(&block.items, block.depth, out),
        }
    }
}

impl fmt::Display for Module {
    /// Render as normalized source: one line per logical line, four spaces per block level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .lines()
            .into_iter()
            .map(|(depth, line)| {
                format!(
                    "{}{}",
                    layout::INDENT_CHAR.to_string().repeat(layout::indent_columns(depth)),
                    line.node
                )
            })
            .collect();
        write!(f, "{}", rendered.join("\n"))
    }
}

// ============================================================================
// Symbols
// ============================================================================

/// Any grammar-producible node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Token(Token),
    Expr(Expr),
    Variable(Variable),
    ArgumentList(ArgumentList),
    Block(Block),
    Module(Module),
}

impl Symbol {
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Symbol::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl From<Token> for Symbol {
    fn from(token: Token) -> Self {
        Symbol::Token(token)
    }
}

impl From<Expr> for Symbol {
    fn from(expr: Expr) -> Self {
        Symbol::Expr(expr)
    }
}

impl From<Variable> for Symbol {
    fn from(variable: Variable) -> Self {
        Symbol::Variable(variable)
    }
}

impl From<ArgumentList> for Symbol {
    fn from(list: ArgumentList) -> Self {
        Symbol::ArgumentList(list)
    }
}

impl From<Block> for Symbol {
    fn from(block: Block) -> Self {
        Symbol::Block(block)
    }
}

impl From<Module> for Symbol {
    fn from(module: Module) -> Self {
        Symbol::Module(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Variable {
        Variable::new(name)
    }

    #[test]
    fn test_argument_rejects_neither_positional_nor_keyword() {
        assert_eq!(
            Argument::new(var("foo"), false, false, false),
            Err(ArgumentError::NeitherPositionalNorKeyword)
        );
        assert_eq!(
            Argument::new(var("foo"), false, false, true),
            Err(ArgumentError::NeitherPositionalNorKeyword)
        );
        assert!(Argument::new(var("foo"), true, false, false).is_ok());
        assert!(Argument::new(var("foo"), false, true, false).is_ok());
    }

    #[test]
    fn test_extra_argument_cannot_be_both() {
        let err = Argument::new(var("foo"), true, true, true).unwrap_err();
        assert_eq!(err, ArgumentError::ExtraBothPositionalAndKeyword);
        assert_eq!(err.to_string(), "\"extra\" arguments cannot be both positional and keyword");
    }

    #[test]
    fn test_argument_kind_from_facets() {
        let kind = |p, k, e| Argument::new(var("x"), p, k, e).unwrap().kind();
        assert_eq!(kind(true, true, false), ArgumentKind::PositionalOrKeyword);
        assert_eq!(kind(true, false, false), ArgumentKind::PositionalOnly);
        assert_eq!(kind(false, true, false), ArgumentKind::KeywordOnly);
        assert_eq!(kind(true, false, true), ArgumentKind::ExtraPositional);
        assert_eq!(kind(false, true, true), ArgumentKind::ExtraKeyword);
    }

    #[test]
    fn test_argument_list_rejects_duplicate_extras() {
        let star = |name| Argument::new(var(name), true, false, true).unwrap();
        let double_star = |name| Argument::new(var(name), false, true, true).unwrap();

        let err = ArgumentList::new(vec![star("a"), star("b")]).unwrap_err();
        assert_eq!(err, ArgumentError::MultipleExtraPositional { name: "b".to_string() });
        assert_eq!(err.to_string(), "'b': cannot have multiple \"extra positional\" arguments");

        let err = ArgumentList::new(vec![double_star("a"), star("b"), double_star("c")]).unwrap_err();
        assert_eq!(err.to_string(), "'c': cannot have multiple \"extra keyword\" arguments");

        assert!(ArgumentList::new(vec![star("a"), double_star("b")]).is_ok());
    }

    #[test]
    fn test_argument_list_display_reinserts_markers() {
        let list = ArgumentList::from_parsed(vec![
            Argument::positional_only(var("a")),
            Argument::ordinary(var("b"), false),
            Argument::ordinary(var("c"), true),
        ]);
        assert_eq!(list.to_string(), "a, /, b, *, c");

        let list = ArgumentList::from_parsed(vec![
            Argument::ordinary(var("a"), false),
            Argument::extra_positional(var("args")),
            Argument::ordinary(var("b"), true),
            Argument::extra_keyword(var("kwargs")),
        ]);
        assert_eq!(list.to_string(), "a, *args, b, **kwargs");
    }

    #[test]
    fn test_variable_display() {
        let v = var("a")
            .with_annotation(Expr::Name("int".to_string()))
            .with_initializer(Expr::Integer(1));
        assert_eq!(v.to_string(), "a: int = 1");
        assert_eq!(var("b").with_initializer(Expr::Name("c".to_string())).to_string(), "b = c");
    }

    #[test]
    fn test_module_display_indents_nested_blocks() {
        let line = |text: &str| BlockItem::Line(Spanned::new(text.to_string(), Span::default()));
        let module = Module {
            items: vec![
                line("a"),
                BlockItem::Block(Block {
                    depth: 1,
                    items: vec![line("b"), BlockItem::Block(Block { depth: 2, items: vec![line("c")] })],
                }),
                line("d"),
            ],
        };
        assert_eq!(module.to_string(), "a\n    b\n        c\nd");
        assert_eq!(module.lines().len(), 4);
    }

    #[test]
    fn test_span_point_is_empty() {
        assert!(Span::point(3, 4).is_empty());
        assert!(!Span::new(0, 1, 0, 0).is_empty());
    }
}
