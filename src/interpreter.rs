/// The environment module stores variable bindings.
///
/// Scopes are kept in an arena and linked to their parents by index, so
/// lookups can fall back to enclosing scopes without any scope owning
/// another.
///
/// # Responsibilities
/// - Defines variables in a specific scope.
/// - Resolves and reassigns names through the parent chain.
/// - Produces ordered snapshots of the visible bindings.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the program tree, evaluates expressions, applies
/// operators, binds variables and collects printed output. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST variant through exhaustive matching.
/// - Manages the variable environment and output lines of a run.
/// - Reports runtime errors such as division by zero or undefined variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens,
/// each corresponding to a meaningful language element such as a number,
/// identifier, operator, delimiter or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Resolves string escapes and parses number literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs a [`crate::ast::Program`] by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Encodes operator precedence through its grammar layers.
/// - Validates syntax, reporting errors with location info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: number, text and boolean.
/// - Formats values the way the print statement shows them.
pub mod value;
