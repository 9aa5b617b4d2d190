//! Shared user-facing diagnostic messages.
//!
//! These strings are part of the user-visible surface and are matched verbatim by tooling and tests.
//! Keep them byte-for-byte stable.

// Indentation
pub const INDENT_OTHER_WHITESPACE_MSG: &str = "each block must be indented four spaces (other whitespace found)";
pub const INDENT_EXTRA_SPACES_MSG: &str = "each block must be indented four spaces (extra spaces found)";
pub const INDENT_OVER_INDENTED_MSG: &str = "each block must be indented four spaces (block over-indented)";

// Parameter lists
pub const MULTIPLE_EXTRA_POSITIONAL_MSG: &str = "multiple \"extra positional\" arguments found";
pub const MULTIPLE_EXTRA_KEYWORD_MSG: &str = "multiple \"extra keyword\" arguments found";
pub const MULTIPLE_END_POSITION_ONLY_MSG: &str = "multiple \"end position-only\" markers found";
pub const END_POSITION_ONLY_AFTER_KEYWORD_ONLY_MSG: &str =
    "\"end position-only\" marker found after \"begin keyword-only\" marker";
pub const MULTIPLE_BEGIN_KEYWORD_ONLY_MSG: &str = "multiple \"begin keyword-only\" markers found";
pub const EXPECTED_VARIABLE_MSG: &str = "expected Variable";

// Variables
pub const EXPECTED_ANNOTATION_MSG: &str = "expected annotation";
pub const EXPECTED_INITIALIZER_MSG: &str = "expected initializer expression";

// Argument construction
pub const NOT_POSITIONAL_OR_KEYWORD_MSG: &str = "all arguments must be positional or keyword or both";
pub const EXTRA_BOTH_POSITIONAL_AND_KEYWORD_MSG: &str = "\"extra\" arguments cannot be both positional and keyword";
// Prefixed with the quoted name of the second extra argument: `'b': cannot have ...`
pub const CANNOT_HAVE_MULTIPLE_EXTRA_POSITIONAL_MSG: &str = "cannot have multiple \"extra positional\" arguments";
pub const CANNOT_HAVE_MULTIPLE_EXTRA_KEYWORD_MSG: &str = "cannot have multiple \"extra keyword\" arguments";

// Literals
pub const INTEGER_OUT_OF_RANGE_MSG: &str = "integer literal out of range";
