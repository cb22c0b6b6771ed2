use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Identifier},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{consume, unexpected},
        },
    },
    stack::ensure_sufficient_stack,
};

/// Parses a unary expression.
///
/// The only prefix operator is `-`. It is right-recursive, so `--x` is legal,
/// and it desugars to `0 - operand` rather than producing its own node.
///
/// Every nested group passes through here, so this is where the stack is
/// grown for deeply nested expressions.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Binary`] subtraction from zero, or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| -> ParseResult<Expr> {
        if let Some(minus) = tokens.next_if(|token| token.kind == TokenKind::Minus) {
            let position = minus.position();
            let operand = parse_unary(tokens)?;
            Ok(Expr::Binary { left: Box::new(Expr::NumberLiteral { value: 0.0, position }),
                              op: BinaryOperator::Sub,
                              right: Box::new(operand),
                              position })
        } else {
            parse_primary(tokens)
        }
    })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - number, string and boolean literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | BOOLEAN | IDENT | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(unexpected(None, "expected expression"));
    };
    let position = token.position();

    let expr = match &token.kind {
        TokenKind::Number(value) => Expr::NumberLiteral { value: *value,
                                                          position },
        TokenKind::String(value) => Expr::StringLiteral { value: value.clone(),
                                                          position },
        TokenKind::Boolean(value) => Expr::BooleanLiteral { value: *value,
                                                            position },
        TokenKind::Identifier(name) => Expr::Identifier(Identifier { name: name.clone(),
                                                                     position }),
        TokenKind::LParen => return parse_grouping(tokens),
        _ => return Err(unexpected(Some(token), "expected expression")),
    };

    tokens.next();
    Ok(expr)
}

/// Parses a parenthesized expression: `"(" expression ")"`.
///
/// Grouping produces no node of its own; the inner expression is returned
/// as is.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    consume(tokens, &TokenKind::LParen, "expected '('")?;
    let expr = parse_expression(tokens)?;
    consume(tokens, &TokenKind::RParen, "expected ')' after expression")?;
    Ok(expr)
}
