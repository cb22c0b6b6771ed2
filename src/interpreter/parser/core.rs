use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program, Statement},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_equality,
            block::parse_block,
            statement::parse_statement,
            utils::{consume, skip_newlines},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a whole token sequence into a [`Program`].
///
/// Newlines between statements are separators and are dropped here; they
/// never reach the evaluator.
///
/// Grammar: `program := (NEWLINE | statement)* EOF`
///
/// # Parameters
/// - `tokens`: Tokens produced by [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The program with its top-level statements in source order.
///
/// # Errors
/// Returns the first [`SyntaxError`] encountered.
///
/// # Example
/// ```
/// use vilang::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("gán a = 1\n\nin (a)").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_newlines(&mut iter);
        match iter.peek() {
            None | Some(Token { kind: TokenKind::Eof, .. }) => break,
            Some(_) => statements.push(parse_statement(&mut iter)?),
        }
    }

    debug!(count = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, equality, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := equality`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_equality(tokens)
}

/// Parses an `nếu` statement with an optional `khác` branch.
///
/// Syntax:
/// ```text
///     nếu (<condition>) { <statements> }
///     khác { <statements> }
/// ```
/// The `khác` keyword may sit on a later line than the closing brace of the
/// first branch, and its `{` may sit on a later line than `khác`. Newlines
/// after the first branch are only consumed when a `khác` actually follows.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `nếu` keyword.
///
/// # Returns
/// A `Statement::If` node.
///
/// # Errors
/// - `UnexpectedToken` if a parenthesis or brace is missing.
/// - `UnterminatedBlock` if input ends inside a branch.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = consume(tokens, &TokenKind::If, "expected 'nếu'")?;

    consume(tokens, &TokenKind::LParen, "expected '(' after 'nếu'")?;
    let condition = parse_expression(tokens)?;
    consume(tokens, &TokenKind::RParen, "expected ')' after condition")?;

    let open = consume(tokens, &TokenKind::LBrace, "expected '{' before 'nếu' body")?;
    let then_branch = parse_block(tokens, open)?;

    let mut lookahead = tokens.clone();
    skip_newlines(&mut lookahead);
    let else_branch = match lookahead.peek() {
        Some(Token { kind: TokenKind::Else, .. }) => {
            skip_newlines(tokens);
            tokens.next();
            skip_newlines(tokens);

            let open = consume(tokens, &TokenKind::LBrace, "expected '{' after 'khác'")?;
            Some(parse_block(tokens, open)?)
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch,
                       position: keyword.position() })
}
