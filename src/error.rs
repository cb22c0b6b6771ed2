/// Syntax errors.
///
/// Defines every failure that can occur while lexing or parsing source code:
/// unexpected characters, malformed literals, unterminated strings and blocks,
/// and tokens that do not fit the grammar.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the tree-walking
/// evaluator executes a program, such as undefined variables, non-numeric
/// arithmetic operands and division by zero.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
