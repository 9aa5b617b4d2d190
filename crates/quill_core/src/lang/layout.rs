//! Layout rules for indentation-sensitive blocks.
//!
//! Blocks are introduced by indentation alone. Every level is exactly [`INDENT_WIDTH`] copies of
//! [`INDENT_CHAR`]; any other leading whitespace is rejected by the parser.

/// Number of indentation characters that make up one block level.
pub const INDENT_WIDTH: usize = 4;

/// The only character allowed in indentation.
pub const INDENT_CHAR: char = ' ';

/// Return the column at which indentation for `depth` levels ends.
///
/// ## Examples
/// ```rust
/// use quill_core::lang::layout;
///
/// assert_eq!(layout::indent_columns(0), 0);
/// assert_eq!(layout::indent_columns(2), 8);
/// ```
pub const fn indent_columns(depth: usize) -> usize {
    depth * INDENT_WIDTH
}
