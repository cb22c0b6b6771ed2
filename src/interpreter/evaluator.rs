/// Core evaluation logic.
///
/// Holds the `Interpreter` state and the statement and expression dispatch
/// over the closed set of AST variants.
pub mod core;

/// Binary operator evaluation.
///
/// Implements arithmetic, text concatenation and strict equality.
pub mod binary;

/// Utility functions for the evaluator.
///
/// Provides the truthiness rule and strict equality between runtime values.
pub mod utils;
