use std::borrow::Cow;

use logos::Logos;
use tracing::debug;
use unicode_normalization::{UnicodeNormalization, is_nfc};

use crate::{ast::Position, error::SyntaxError};

/// Represents the kind of a lexical token.
///
/// This enum defines all recognized tokens in the language. Keywords are
/// Vietnamese words; identifiers may use the extended Latin letters needed to
/// write Vietnamese, including decomposed combining diacritics.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens: any run of digits and dots, such as `3.14`.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// String literal tokens with escapes resolved, such as `"Xin chào\n"`.
    #[token("\"", lex_string)]
    String(String),
    /// `đúng` or `sai`.
    #[token("đúng", |_| true)]
    #[token("sai", |_| false)]
    Boolean(bool),
    /// `gán`
    #[token("gán")]
    Assign,
    /// `nếu`
    #[token("nếu")]
    If,
    /// `khác`
    #[token("khác")]
    Else,
    /// `lặp`, reserved.
    #[token("lặp")]
    Loop,
    /// `hàm`, reserved.
    #[token("hàm")]
    Function,
    /// `trả_về`, reserved.
    #[token("trả_về")]
    Return,
    /// `in`
    #[token("in")]
    Print,
    /// Identifier tokens; variable names such as `tổng` or `x1`.
    #[regex(r"[a-zA-Z\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{024F}\x{1E00}-\x{1EFF}][a-zA-Z0-9_\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{024F}\x{0300}-\x{036F}\x{1E00}-\x{1EFF}]*",
            |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Statement separator.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends it.
    Eof,
}

/// Failure modes reported by the scanner before positions are attached.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LexErrorKind {
    /// No token matches at this position.
    #[default]
    UnexpectedCharacter,
    /// A run of digits and dots that does not parse as a number.
    InvalidNumber,
    /// A backslash followed by an unsupported character.
    InvalidEscape(char),
    /// The closing quote was never found on this line.
    UnterminatedString,
}

impl LexErrorKind {
    fn into_syntax_error(self, slice: &str, line: usize, column: usize) -> SyntaxError {
        match self {
            Self::UnexpectedCharacter if slice.starts_with('!') => {
                SyntaxError::LoneBang { line, column }
            },
            Self::UnexpectedCharacter => {
                SyntaxError::UnexpectedCharacter { character: slice.chars().take(1).collect(),
                                                   line,
                                                   column }
            },
            Self::InvalidNumber => SyntaxError::InvalidNumber { literal: slice.to_string(),
                                                                line,
                                                                column },
            Self::InvalidEscape(escape) => SyntaxError::InvalidEscape { escape, line, column },
            Self::UnterminatedString => SyntaxError::UnterminatedString { line, column },
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, so columns can be computed for every token.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is, including any literal payload.
    pub kind:   TokenKind,
    /// The exact source slice the token was scanned from.
    pub lexeme: String,
    /// 1-based line of the first character.
    pub line:   usize,
    /// 1-based column of the first character.
    pub column: usize,
}

impl Token {
    /// Gets the source position of the token.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Describes the token for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::NewLine => "newline".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            _ => self.lexeme.clone(),
        }
    }
}

/// Scans `source` into tokens.
///
/// The source is composed into Unicode NFC first, so keywords and names
/// written with combining diacritics match their precomposed spellings.
/// Columns count characters of the composed text.
///
/// Newlines are kept as [`TokenKind::NewLine`] tokens because they separate
/// statements. The returned vector always ends with a single
/// [`TokenKind::Eof`] token.
///
/// # Errors
/// Returns a [`SyntaxError`] for an unrecognized character, a lone `!`, a
/// malformed number, an unsupported escape or an unterminated string.
///
/// # Example
/// ```
/// use vilang::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("gán x = 1").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Assign,
///                 TokenKind::Identifier("x".to_string()),
///                 TokenKind::Equals,
///                 TokenKind::Number(1.0),
///                 TokenKind::Eof]);
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let normalized = normalize(source);
    let source: &str = &normalized;
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line:       1,
                                                                       line_start: 0, });
    let mut tokens = Vec::new();

    loop {
        let line = lexer.extras.line;
        let line_start = lexer.extras.line_start;
        let Some(result) = lexer.next() else {
            break;
        };
        let column = column_at(source, line_start, lexer.span().start);

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice().to_string(),
                                            line,
                                            column }),
            Err(error) => return Err(error.into_syntax_error(lexer.slice(), line, column)),
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        lexeme: String::new(),
                        line:   lexer.extras.line,
                        column: column_at(source, lexer.extras.line_start, source.len()), });

    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Composes `source` into NFC, borrowing it when it already is.
fn normalize(source: &str) -> Cow<'_, str> {
    if is_nfc(source) {
        Cow::Borrowed(source)
    } else {
        Cow::Owned(source.nfc().collect())
    }
}

/// Counts characters between the start of the line and `offset`.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source.get(line_start..offset)
          .map_or(1, |prefix| prefix.chars().count() + 1)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<TokenKind>) -> Result<f64, LexErrorKind> {
    lex.slice().parse().map_err(|_| LexErrorKind::InvalidNumber)
}

/// Scans the body of a string literal after its opening quote.
///
/// The closing quote must appear on the same line. Escapes `\n`, `\t`, `\\`
/// and `\"` are resolved here.
fn lex_string(lex: &mut logos::Lexer<TokenKind>) -> Result<String, LexErrorKind> {
    let mut value = String::new();
    let mut chars = lex.remainder().char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(value);
            },
            '\\' => match chars.next() {
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, '"')) => value.push('"'),
                Some((escape_offset, '\n')) => {
                    lex.bump(escape_offset);
                    return Err(LexErrorKind::UnterminatedString);
                },
                Some((escape_offset, escape)) => {
                    lex.bump(escape_offset + escape.len_utf8());
                    return Err(LexErrorKind::InvalidEscape(escape));
                },
                None => break,
            },
            '\n' => {
                lex.bump(offset);
                return Err(LexErrorKind::UnterminatedString);
            },
            c => value.push(c),
        }
    }

    let rest = lex.remainder().len();
    lex.bump(rest);
    Err(LexErrorKind::UnterminatedString)
}
