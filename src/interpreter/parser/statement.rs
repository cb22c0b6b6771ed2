use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression, parse_if},
            utils::{consume, parse_identifier, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// A statement is selected by its leading keyword:
/// - `gán` starts an assignment.
/// - `in` starts a print statement.
/// - `nếu` starts a conditional.
///
/// The reserved keywords `lặp`, `hàm` and `trả_về` are rejected with a
/// dedicated error. Anything else is an unexpected token.
///
/// Grammar: `statement := assignStmt | printStmt | ifStmt`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected(None, "expected a statement"));
    };

    match token.kind {
        TokenKind::Assign => parse_assignment(tokens),
        TokenKind::Print => parse_print(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::Loop | TokenKind::Function | TokenKind::Return => {
            Err(SyntaxError::UnsupportedKeyword { keyword: token.lexeme.clone(),
                                                  line:    token.line,
                                                  column:  token.column, })
        },
        _ => Err(unexpected(Some(token), "expected a statement")),
    }
}

/// Parses an assignment statement.
///
/// An assignment has the form `gán <identifier> = <expression>`. The value is
/// bound in the current scope when the statement runs.
///
/// # Errors
/// Returns a `SyntaxError` if the identifier or `=` is missing or the
/// expression is malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = consume(tokens, &TokenKind::Assign, "expected 'gán'")?;
    let target = parse_identifier(tokens)?;
    consume(tokens, &TokenKind::Equals, "expected '=' after variable name")?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { target,
                               value,
                               position: keyword.position() })
}

/// Parses a print statement of the form `in (<expression>)`.
///
/// # Errors
/// Returns a `SyntaxError` if either parenthesis is missing or the
/// expression is malformed.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = consume(tokens, &TokenKind::Print, "expected 'in'")?;
    consume(tokens, &TokenKind::LParen, "expected '(' after 'in'")?;
    let value = parse_expression(tokens)?;
    consume(tokens, &TokenKind::RParen, "expected ')' after expression")?;

    Ok(Statement::Print { value,
                          position: keyword.position() })
}
