/// Parser entry points.
///
/// Contains the program-level loop, the expression entry point and the
/// conditional statement parser.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and the atomic expressions: literals, identifiers
/// and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence layer: equality, comparison, term and factor.
/// Precedence is encoded by which layer calls which.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used by conditional branches.
pub mod block;

/// Utility functions for the parser.
///
/// Provides `consume`, the single check for structural tokens, and other
/// shared helpers.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading keyword to assignment, print and conditional
/// statements.
pub mod statement;

pub use self::core::parse;
