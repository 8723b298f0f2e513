use crate::{
    ast::{Expr, InfixOperator},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses the infix position of an expression.
    ///
    /// Called by the Pratt loop once the peek token has been established as
    /// an infix token of sufficient precedence. The cursor advances onto
    /// that token and dispatches: `(` begins a call, `[` begins an index,
    /// anything else is a binary operator.
    ///
    /// # Parameters
    /// - `left`: The expression parsed so far, captured as the left operand
    ///   (or callee, or indexed collection).
    pub(in crate::interpreter::parser) fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        self.advance();

        match self.current() {
            Token::LParen => self.parse_call(left),
            Token::LBracket => self.parse_index(left),
            _ => self.parse_infix_operator(left),
        }
    }

    /// Parses `<left> <op> <right>` for a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every operator left-associative:
    /// `a + b + c` groups as `((a + b) + c)`.
    fn parse_infix_operator(&mut self, left: Expr) -> Option<Expr> {
        let op = match self.current() {
            Token::Plus => InfixOperator::Add,
            Token::Minus => InfixOperator::Sub,
            Token::Asterisk => InfixOperator::Mul,
            Token::Slash => InfixOperator::Div,
            Token::Less => InfixOperator::Less,
            Token::Greater => InfixOperator::Greater,
            Token::EqualEqual => InfixOperator::Equal,
            Token::BangEqual => InfixOperator::NotEqual,
            // The Pratt loop only dispatches here for the tokens above.
            _ => unreachable!(),
        };

        let precedence = Precedence::of(self.current());
        self.advance();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { left: Box::new(left),
                           op,
                           right: Box::new(right) })
    }

    /// Parses a call expression: `<callee> ( <arguments> )`.
    ///
    /// The callee is whatever expression the Pratt loop had already built;
    /// identifiers, function literals and nested calls all work, which is
    /// what makes `c(10)(32)` parse.
    fn parse_call(&mut self, callee: Expr) -> Option<Expr> {
        let arguments =
            self.parse_comma_separated(|p| p.parse_expression(Precedence::Lowest),
                                       &Token::RParen)?;

        Some(Expr::Call { callee: Box::new(callee),
                          arguments })
    }

    /// Parses an index expression: `<collection> [ <index> ]`.
    fn parse_index(&mut self, collection: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RBracket) {
            return None;
        }

        Some(Expr::Index { collection: Box::new(collection),
                           index:      Box::new(index), })
    }
}
