use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::lexer::{Scanner, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A recursive-descent parser over one line of input.
///
/// The parser pulls tokens from its [`Scanner`] one at a time and keeps
/// exactly one of them, the current token, as lookahead. A parser is used for
/// a single line and then dropped.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    current: Token<'src>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and scans the first token of `source`.
    ///
    /// # Errors
    /// Returns a lexical error if the first token cannot be scanned.
    pub fn new(source: &'src str) -> ParseResult<Self> {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token()?;
        Ok(Self { scanner, current })
    }

    /// The token currently under the cursor.
    #[must_use]
    pub const fn current(&self) -> Token<'src> {
        self.current
    }

    /// Parses a full line: one expression followed by the end of input.
    ///
    /// Grammar: `line := expression END`
    ///
    /// # Errors
    /// Returns a `ParseError` if the expression is malformed or anything
    /// follows it.
    ///
    /// # Example
    /// ```
    /// use linecalc::interpreter::parser::core::Parser;
    ///
    /// assert!(Parser::new("x = 2 * 3").unwrap().parse_line().is_ok());
    /// assert!(Parser::new("2 3").unwrap().parse_line().is_err());
    /// ```
    pub fn parse_line(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expression()?;
        self.consume(Token::End)?;
        Ok(expr)
    }

    /// Moves past the current token and scans the next one.
    ///
    /// Returns the token that was current before advancing.
    pub(super) fn advance(&mut self) -> ParseResult<Token<'src>> {
        let next = self.scanner.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it has the same category as `expected`.
    ///
    /// Only the category is compared, so a payload-carrying `expected` may
    /// hold any text.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] carrying the current token's
    /// text when it does not match.
    pub(super) fn consume(&mut self, expected: Token<'src>) -> ParseResult<Token<'src>> {
        if std::mem::discriminant(&self.current) == std::mem::discriminant(&expected) {
            self.advance()
        } else {
            Err(self.unexpected())
        }
    }

    /// Builds the error for an unexpected current token.
    pub(super) fn unexpected(&self) -> ParseError {
        ParseError::UnexpectedToken { token: self.current.text().to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> ParseResult<Expr> {
        Parser::new(source)?.parse_line()
    }

    fn unexpected(token: &str) -> ParseError {
        ParseError::UnexpectedToken { token: token.to_string() }
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        assert_eq!(parse("2 3"), Err(unexpected("3")));
        assert_eq!(parse("(1 + 2))"), Err(unexpected(")")));
        assert_eq!(parse("1 = 2"), Err(unexpected("=")));
    }

    #[test]
    fn missing_tokens_report_end_of_input() {
        assert_eq!(parse(""), Err(unexpected("end of input")));
        assert_eq!(parse("(1 + 2"), Err(unexpected("end of input")));
        assert_eq!(parse("x ="), Err(unexpected("end of input")));
        assert_eq!(parse("1 +"), Err(unexpected("end of input")));
    }

    #[test]
    fn lexical_errors_surface_from_any_position() {
        let err = ParseError::UnexpectedCharacter { character: '^' };
        assert_eq!(parse("^2").err(), Some(err.clone()));
        assert_eq!(parse("2 ^ 3").err(), Some(err));
    }

    #[test]
    fn the_first_token_is_current_after_construction() {
        let parser = Parser::new("  sin(1)").unwrap();
        assert_eq!(parser.current(), Token::Identifier("sin"));
    }
}
