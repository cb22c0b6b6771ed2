use std::iter::Peekable;

use crate::{
    ast::{Identifier, Position},
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Consumes the next token if it has the expected kind.
///
/// This is the single enforcement point for structural tokens (`(`, `)`,
/// `{`, `}` and `=`). On a mismatch the returned error carries `message`
/// together with the position and text of the token that was found instead.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected token.
/// - `expected`: The token kind that must come next.
/// - `message`: Human-readable description of the expectation, such as
///   `"expected ')' after expression"`.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns [`SyntaxError::UnexpectedToken`] or
/// [`SyntaxError::UnexpectedEndOfInput`] when the next token differs.
pub(in crate::interpreter::parser) fn consume<'a, I>(tokens: &mut Peekable<I>,
                                                     expected: &TokenKind,
                                                     message: &str)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next_if(|token| token.kind == *expected) {
        Some(token) => Ok(token),
        None => Err(unexpected(tokens.peek().copied(), message)),
    }
}

/// Builds the error for finding `found` where `expected` was required.
///
/// The end-of-input token, or running out of tokens entirely, produces
/// [`SyntaxError::UnexpectedEndOfInput`].
pub(in crate::interpreter::parser) fn unexpected(found: Option<&Token>,
                                                 expected: &str)
                                                 -> SyntaxError {
    match found {
        Some(token) if token.kind != TokenKind::Eof => {
            SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                           found:    token.describe(),
                                           line:     token.line,
                                           column:   token.column, }
        },
        Some(token) => SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                           line:     token.line,
                                                           column:   token.column, },
        None => SyntaxError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                    line:     0,
                                                    column:   0, },
    }
}

/// Parses a plain identifier.
///
/// The next token must be [`TokenKind::Identifier`]. Keywords are separate
/// token kinds, so they are rejected here.
///
/// # Errors
/// Returns a `SyntaxError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Identifier>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::Identifier(name),
                     line,
                     column,
                     .. }) => {
            let identifier = Identifier { name:     name.clone(),
                                          position: Position::new(*line, *column), };
            tokens.next();
            Ok(identifier)
        },
        found => Err(unexpected(found.copied(), "expected variable name")),
    }
}

/// Skips any run of newline tokens.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token> + Clone
{
    while tokens.next_if(|token| token.kind == TokenKind::NewLine)
                .is_some()
    {}
}
