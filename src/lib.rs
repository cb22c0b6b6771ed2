//! # vilang
//!
//! vilang is an interpreter for a small imperative language whose keywords
//! are Vietnamese. Source text is tokenized, parsed into an abstract syntax
//! tree and evaluated by walking that tree; a run yields the printed lines
//! and the final variable bindings.
//!
//! ```text
//! gán a = 10
//! gán b = 20
//! nếu (a + b == 30) {
//!     in ("tổng là " + (a + b))
//! } khác {
//!     in ("sai rồi")
//! }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::{RuntimeError, SyntaxError},
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr`, `Statement` and `Program` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression and statement variants.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing
/// or evaluating code. Every error carries the line and column it refers to.
///
/// # Responsibilities
/// - Defines `SyntaxError` for lexer and parser failures.
/// - Defines `RuntimeError` for evaluator failures.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the variable environment,
/// evaluation and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Provides entry points for each stage.
pub mod interpreter;
mod stack;

pub use interpreter::{evaluator::core::RunOutput, value::Value};

/// The two families of failure a run can end with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The source could not be tokenized or parsed.
    Syntax,
    /// The program failed while executing.
    Runtime,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax => write!(f, "Syntax"),
            Self::Runtime => write!(f, "Runtime"),
        }
    }
}

/// Any error returned by [`run`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    #[error("Syntax error at line {line}, column {column}: {0}", line = .0.line(), column = .0.column())]
    Syntax(#[from] SyntaxError),
    /// Evaluation failed.
    #[error("Runtime error at line {line}, column {column}: {0}", line = .0.line(), column = .0.column())]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Whether this is a syntax or a runtime error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }

    /// The error message without kind or location.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Syntax(e) => e.to_string(),
            Self::Runtime(e) => e.to_string(),
        }
    }

    /// The 1-based line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }

    /// The 1-based column the error refers to, when it is known.
    #[must_use]
    pub const fn column(&self) -> Option<usize> {
        let column = match self {
            Self::Syntax(e) => e.column(),
            Self::Runtime(e) => e.column(),
        };
        if column == 0 { None } else { Some(column) }
    }
}

/// Runs a complete program and returns what it printed and bound.
///
/// Each call tokenizes, parses and evaluates `source` with a fresh
/// interpreter, so independent calls share no state and may run on
/// different threads. When evaluation fails, output printed before the
/// failure is discarded and only the error is returned.
///
/// # Errors
/// Returns [`Error::Syntax`] if the source cannot be tokenized or parsed, and
/// [`Error::Runtime`] for the first failing statement.
///
/// # Examples
/// ```
/// use vilang::{ErrorKind, run};
///
/// let result = run("gán a = 10\ngán b = 20\nin (a + b)").unwrap();
/// assert_eq!(result.output, vec!["30".to_string()]);
///
/// // 'x' is never assigned.
/// let error = run("in (x)").unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::Runtime);
/// assert!(error.message().contains('x'));
/// ```
pub fn run(source: &str) -> Result<RunOutput, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(&program)?;

    debug!(lines = result.output.len(),
           bindings = result.bindings.len(),
           "run finished");
    Ok(result)
}
