use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{consume, skip_newlines},
        },
    },
    stack::ensure_sufficient_stack,
};

/// Parses the statements of a block up to and including its closing brace.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Leading and trailing newlines inside the block are ignored.
///
/// Grammar: `block := (NEWLINE | statement)* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `open`: The opening brace, used to position an unterminated block.
///
/// # Returns
/// The statements of the block in source order.
///
/// # Errors
/// Returns [`SyntaxError::UnterminatedBlock`] if input ends before `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, open: &Token) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    ensure_sufficient_stack(|| -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        loop {
            skip_newlines(tokens);
            match tokens.peek() {
                Some(Token { kind: TokenKind::RBrace, .. }) => break,
                None | Some(Token { kind: TokenKind::Eof, .. }) => {
                    return Err(SyntaxError::UnterminatedBlock { line:   open.line,
                                                                column: open.column, });
                },
                Some(_) => statements.push(parse_statement(tokens)?),
            }
        }

        consume(tokens, &TokenKind::RBrace, "expected '}' to close block")?;
        Ok(statements)
    })
}
