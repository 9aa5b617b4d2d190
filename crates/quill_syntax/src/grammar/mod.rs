//! Composite grammar rules built on the ordered-alternation engine.
//!
//! - [`argument_list`]: parameter lists with `/`, `*` and `**` markers.
//! - [`variable`]: the variable grammar a parameter list delegates to.
//! - [`block`]: indentation-only block outline of a file.

pub mod argument_list;
pub mod block;
pub mod variable;

pub use argument_list::ArgumentListRule;
pub use block::{BlockRule, ModuleRule};
pub use variable::{SimpleVariables, VariableGrammar};
