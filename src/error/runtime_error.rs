use thiserror::Error;

use crate::ast::BinaryOperator;

/// Represents all errors that can occur during evaluation.
///
/// The position is that of the expression or statement that failed: the
/// identifier for undefined variables, the operator for arithmetic failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// Tried to read a variable that no scope defines.
    #[error("undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An arithmetic operator other than `+` received a non-number.
    #[error("operands must be numbers for '{operator}'")]
    OperandsMustBeNumbers {
        /// The operator that was applied.
        operator: BinaryOperator,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Attempted division by exactly zero.
    #[error("division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl RuntimeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::OperandsMustBeNumbers { line, .. }
            | Self::DivisionByZero { line, .. } => *line,
        }
    }

    /// Gets the column number from `self`.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UndefinedVariable { column, .. }
            | Self::OperandsMustBeNumbers { column, .. }
            | Self::DivisionByZero { column, .. } => *column,
        }
    }
}
