use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the 1-based line and column of the offending
/// character or token. The `Display` form is the bare message; location
/// prefixes are added by [`crate::Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot start any token.
    #[error("unexpected character '{character}'")]
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A `!` that is not part of `!=`.
    #[error("expected '=' after '!'")]
    LoneBang {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A run of digits and dots that is not a valid decimal number.
    #[error("invalid number '{literal}'")]
    InvalidNumber {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// A backslash escape other than `\n`, `\t`, `\\` or `\"`.
    #[error("invalid escape sequence '\\{escape}' in string")]
    InvalidEscape {
        /// The character that followed the backslash.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A string literal that reached a newline or end of input before its
    /// closing quote.
    #[error("unterminated string")]
    UnterminatedString {
        /// The line of the opening quote.
        line:   usize,
        /// The column of the opening quote.
        column: usize,
    },
    /// Found a token that does not fit the grammar at this point.
    #[error("{expected}, found '{found}'")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: String,
        /// The lexeme that was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Reached the end of input while more tokens were required.
    #[error("{expected}, found unexpected end of input")]
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A `{` whose matching `}` never appeared.
    #[error("unterminated block")]
    UnterminatedBlock {
        /// The line of the opening brace.
        line:   usize,
        /// The column of the opening brace.
        column: usize,
    },
    /// A reserved keyword for a construct the language does not have yet.
    #[error("'{keyword}' is reserved but not supported")]
    UnsupportedKeyword {
        /// The keyword as written.
        keyword: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl SyntaxError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::LoneBang { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidEscape { line, .. }
            | Self::UnterminatedString { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::UnterminatedBlock { line, .. }
            | Self::UnsupportedKeyword { line, .. } => *line,
        }
    }

    /// Gets the column number from `self`.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::LoneBang { column, .. }
            | Self::InvalidNumber { column, .. }
            | Self::InvalidEscape { column, .. }
            | Self::UnterminatedString { column, .. }
            | Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::UnterminatedBlock { column, .. }
            | Self::UnsupportedKeyword { column, .. } => *column,
        }
    }
}
