use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses addition and subtraction expressions.
    ///
    /// This is the lowest precedence level and the entry point for any
    /// expression, including the right-hand side of an assignment. Operators
    /// are left-associative, so `10 - 3 - 2` is `(10 - 3) - 2`.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    ///
    /// # Errors
    /// Propagates any `ParseError` raised by the operands.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        while let Some(op) = additive_operator(self.current()) {
            self.advance()?;
            let right = self.parse_term()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// Grammar: `term := factor (("*" | "/") factor)*`
    pub(super) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        while let Some(op) = multiplicative_operator(self.current()) {
            self.advance()?;
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }
}

const fn additive_operator(token: Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(token: Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
