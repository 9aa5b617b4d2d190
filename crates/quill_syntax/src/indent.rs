//! Indentation depth measurement
//!
//! Block structure is inferred from leading whitespace while parsing; there is no separate INDENT/DEDENT pass.
//! A line's indentation must be spaces only, a multiple of [`INDENT_WIDTH`], and at most one level deeper
//! than the enclosing block. Any violation is a [`FatalError`].
//!
//! ## Notes
//! - [`LineIndent`] is the depth-independent half of the measurement. [`crate::cursor::Source`] scans it once
//!   per line, so backtracking through the same line never rescans the text.
//! - The over-indentation check depends on the block depth at the time of the attempt and is applied by
//!   [`measure_block_depth`] on every call.

use quill_core::lang::layout::{INDENT_CHAR, INDENT_WIDTH, indent_columns};

use crate::cursor::Source;
use crate::diagnostics::{FatalError, IndentationViolation};

/// Leading whitespace of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineIndent {
    /// Number of leading indentation spaces.
    pub spaces: usize,
    /// Column of the first non-space whitespace character directly after the spaces, if any.
    pub other_whitespace: Option<usize>,
}

impl LineIndent {
    pub fn scan(text: &str) -> Self {
        let spaces = text.len() - text.trim_start_matches(INDENT_CHAR).len();
        let other_whitespace = text[spaces..]
            .chars()
            .next()
            .filter(|c| c.is_whitespace())
            .map(|_| spaces);
        Self {
            spaces,
            other_whitespace,
        }
    }
}

/// Measure the block depth of `line`, given the depth of the block the cursor is in.
///
/// ## Errors
/// - [`IndentationViolation::OtherWhitespace`] at the first non-space whitespace character.
/// - [`IndentationViolation::ExtraSpaces`] at the first space past the last full level.
/// - [`IndentationViolation::OverIndented`] at the start of the indentation beyond `block_depth + 1`.
pub fn measure_block_depth(source: &Source, line: usize, block_depth: usize) -> Result<usize, FatalError> {
    let indent = source.indent(line);

    if let Some(column) = indent.other_whitespace {
        return Err(FatalError::indentation(IndentationViolation::OtherWhitespace, line, column));
    }

    let depth = indent.spaces / INDENT_WIDTH;
    if indent.spaces % INDENT_WIDTH != 0 {
        return Err(FatalError::indentation(
            IndentationViolation::ExtraSpaces,
            line,
            indent_columns(depth),
        ));
    }

    if block_depth + 1 < depth {
        return Err(FatalError::indentation(
            IndentationViolation::OverIndented,
            line,
            indent_columns(block_depth + 1),
        ));
    }

    Ok(depth)
}
