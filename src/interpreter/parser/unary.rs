use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl<'src> Parser<'src> {
    /// Parses a factor, the highest precedence level.
    ///
    /// Negation is right-recursive, so `--5` is `-(-5)`. An identifier is a
    /// function call when followed by `(`, an assignment when followed by
    /// `=`, and a variable reference otherwise. The right-hand side of an
    /// assignment is a full expression, which lets assignments nest inside
    /// arithmetic: `2 * (y = 3)`.
    ///
    /// Grammar:
    /// ```text
    ///     factor := "-" factor
    ///             | NUMBER
    ///             | IDENTIFIER "(" arglist? ")"
    ///             | IDENTIFIER "=" expression
    ///             | IDENTIFIER
    ///             | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedToken`] when the current token cannot
    /// start a factor, and [`ParseError::InvalidNumber`] for malformed
    /// literals.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current() {
            Token::Minus => {
                self.advance()?;
                Ok(Expr::negate(self.parse_factor()?))
            },
            Token::Number(text) => {
                self.advance()?;
                parse_number(text)
            },
            Token::Identifier(name) => {
                self.advance()?;
                self.parse_identifier_tail(name)
            },
            Token::LParen => self.parse_grouping(),
            _ => Err(self.unexpected()),
        }
    }

    /// Decides what an already consumed identifier introduces.
    fn parse_identifier_tail(&mut self, name: &'src str) -> ParseResult<Expr> {
        match self.current() {
            Token::LParen => self.parse_function_call(name),
            Token::Equals => {
                self.advance()?;
                let value = self.parse_expression()?;
                Ok(Expr::Assignment { name:  name.to_string(),
                                      value: Box::new(value), })
            },
            _ => Ok(Expr::Variable { name: name.to_string() }),
        }
    }

    /// Parses a parenthesized expression.
    ///
    /// Grammar: `grouping := "(" expression ")"`
    ///
    /// The inner expression is returned as-is, with no wrapper node.
    fn parse_grouping(&mut self) -> ParseResult<Expr> {
        self.consume(Token::LParen)?;
        let expr = self.parse_expression()?;
        self.consume(Token::RParen)?;
        Ok(expr)
    }

    /// Parses the argument list of a function call.
    ///
    /// Neither the name nor the number of arguments is checked here; both are
    /// resolved against the function table during evaluation. An empty list
    /// `f()` is accepted.
    ///
    /// Grammar: `call := IDENTIFIER "(" (expression ("," expression)*)? ")"`
    fn parse_function_call(&mut self, name: &str) -> ParseResult<Expr> {
        self.consume(Token::LParen)?;
        let mut arguments = Vec::new();
        if self.current() != Token::RParen {
            loop {
                arguments.push(self.parse_expression()?);
                if self.current() == Token::Comma {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }
        self.consume(Token::RParen)?;
        Ok(Expr::FunctionCall { name: name.to_string(),
                                arguments })
    }
}

/// Converts the text of a number token into a literal node.
///
/// The scanner accepts any run of digits and dots, so text with more than one
/// dot, or a lone `.`, is rejected here.
fn parse_number(text: &str) -> ParseResult<Expr> {
    text.parse()
        .map(|value| Expr::Literal { value })
        .map_err(|_| ParseError::InvalidNumber { literal: text.to_string() })
}

#[cfg(test)]
mod tests {
    use crate::{ast::Expr, error::ParseError, parse_line};

    fn shape(source: &str) -> String {
        parse_line(source).unwrap().to_string()
    }

    #[test]
    fn negation_is_right_recursive() {
        assert_eq!(shape("--5"), "(-(-5))");
        assert_eq!(shape("-2 * 3"), "((-2) * 3)");
        assert_eq!(shape("-(2 + 3)"), "(-(2 + 3))");
    }

    #[test]
    fn literal_text_converts_to_the_intended_value() {
        for (text, value) in [("0", 0.0), ("42", 42.0), ("3.25", 3.25), (".5", 0.5), ("1.", 1.0),
                              ("007.125", 7.125)]
        {
            assert_eq!(parse_line(text), Ok(Expr::Literal { value }));
        }
    }

    #[test]
    fn malformed_literals_are_syntax_errors() {
        for text in ["1.2.3", ".", "1..2"] {
            assert_eq!(parse_line(text),
                       Err(ParseError::InvalidNumber { literal: text.to_string() }));
        }
    }

    #[test]
    fn assignment_takes_a_whole_expression() {
        assert_eq!(shape("x = 4 + 1"), "(x = (4 + 1))");
        assert_eq!(shape("a = b = 2"), "(a = (b = 2))");
        assert_eq!(shape("2 * (y = 3)"), "(2 * (y = 3))");
        assert_eq!(shape("1 + x = 2 + 3"), "(1 + (x = (2 + 3)))");
    }

    #[test]
    fn function_calls_collect_arguments_in_order() {
        assert_eq!(shape("pow(2, 10)"), "pow(2, 10)");
        assert_eq!(shape("f()"), "f()");
        assert_eq!(shape("g(1, x = 2, -y)"), "g(1, (x = 2), (-y))");
        assert_eq!(shape("sin(cos(0))"), "sin(cos(0))");
    }

    #[test]
    fn malformed_calls_fail() {
        for source in ["f(1,)", "f(1 2)", "f(", "f(,)"] {
            assert!(parse_line(source).is_err(), "{source}");
        }
    }

    #[test]
    fn a_number_cannot_be_assigned() {
        assert!(parse_line("3 = x").is_err());
    }
}
