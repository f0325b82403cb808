use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a calculator line.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Number and identifier tokens borrow their text from the scanned line; the
/// parser converts number text into a value.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
pub enum Token<'src> {
    /// Numeric literal text, such as `3.14`, `.5` or `42`.
    ///
    /// Any run of digits and dots is accepted here; malformed text such as
    /// `1.2.3` is rejected when the parser converts it.
    #[regex(r"[0-9.]+", |lex| lex.slice())]
    Number(&'src str),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice())]
    Identifier(&'src str),
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
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `^`. Reserved: no input produces it, so `^` is a lexical error.
    Power,
    /// End of the scanned line. Never produced by logos itself.
    End,
}

impl Token<'_> {
    /// Returns the source text of the token, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Number("2.5").text(), "2.5");
    /// assert_eq!(Token::Star.text(), "*");
    /// assert_eq!(Token::End.text(), "end of input");
    /// ```
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(s) | Self::Identifier(s) => s,
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Equals => "=",
            Self::Comma => ",",
            Self::Power => "^",
            Self::End => "end of input",
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Produces tokens from a single line on demand.
///
/// The scanner keeps a cursor into the line that only moves forward. Each call
/// to [`Scanner::next_token`] recognizes exactly one token; once the input is
/// exhausted every further call returns [`Token::End`].
pub struct Scanner<'src> {
    lexer: logos::Lexer<'src, Token<'src>>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer(source) }
    }

    /// Scans the next token.
    ///
    /// Leading whitespace is skipped. Characters that start no token produce
    /// [`ParseError::UnexpectedCharacter`].
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::lexer::{Scanner, Token};
    ///
    /// let mut scanner = Scanner::new("x1 = .5");
    /// assert_eq!(scanner.next_token().unwrap(), Token::Identifier("x1"));
    /// assert_eq!(scanner.next_token().unwrap(), Token::Equals);
    /// assert_eq!(scanner.next_token().unwrap(), Token::Number(".5"));
    /// assert_eq!(scanner.next_token().unwrap(), Token::End);
    /// assert!(Scanner::new("2 ^ 3").nth(1).unwrap().is_err());
    /// ```
    pub fn next_token(&mut self) -> Result<Token<'src>, ParseError> {
        match self.lexer.next() {
            Some(Ok(token)) => {
                log::trace!("scanned {token:?}");
                Ok(token)
            },
            Some(Err(())) => {
                let character = self.lexer
                                    .source()
                                    .get(self.lexer.span().start..)
                                    .and_then(|rest| rest.chars().next())
                                    .unwrap_or_default();
                Err(ParseError::UnexpectedCharacter { character })
            },
            None => Ok(Token::End),
        }
    }
}

/// Iterates over the tokens of a line, stopping before [`Token::End`].
impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::End) => None,
            other => Some(other),
        }
    }
}
