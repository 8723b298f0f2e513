use crate::{
    ast::{Expr, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses the prefix position of an expression.
    ///
    /// Dispatches on the current token to the construct it can begin:
    /// literals and identifiers complete immediately; operators, grouped
    /// expressions, conditionals, function literals, arrays and hashes
    /// recurse. A token that cannot begin an expression records a
    /// `no prefix parse function` diagnostic.
    pub(in crate::interpreter::parser) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current().clone() {
            Token::Identifier(name) => Some(Expr::Identifier(name)),
            Token::Integer(value) => Some(Expr::IntegerLiteral(value)),
            Token::Bool(value) => Some(Expr::BooleanLiteral(value)),
            Token::Str(value) => Some(Expr::StringLiteral(value)),
            Token::Bang => self.parse_prefix_operator(PrefixOperator::Not),
            Token::Minus => self.parse_prefix_operator(PrefixOperator::Negate),
            Token::LParen => self.parse_grouped(),
            Token::If => self.parse_if(),
            Token::Function => self.parse_function_literal(),
            Token::LBracket => self.parse_array_literal(),
            Token::LBrace => self.parse_hash_literal(),
            token => {
                let line = self.current_line();
                self.errors
                    .push(ParseError::NoPrefixParse { token: token.kind_name().to_string(),
                                                      line });
                None
            },
        }
    }

    /// Parses `!<operand>` or `-<operand>`.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` groups
    /// as `((-a) * b)`.
    fn parse_prefix_operator(&mut self, op: PrefixOperator) -> Option<Expr> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expr::Prefix { op,
                            right: Box::new(right) })
    }

    /// Parses a parenthesized expression: `( <expression> )`.
    ///
    /// Grouping produces no AST node of its own; the parentheses only reset
    /// the precedence floor.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }

        Some(expr)
    }

    /// Parses a conditional expression.
    ///
    /// Syntax: `if ( <condition> ) { <consequence> } else { <alternative> }`
    /// with the `else` branch optional.
    fn parse_if(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::RParen) {
            return None;
        }
        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let consequence = self.parse_block()?;

        let alternative = if self.peek_is(&Token::Else) {
            self.advance();
            if !self.expect_peek(&Token::LBrace) {
                return None;
            }
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition),
                        consequence,
                        alternative })
    }

    /// Parses a function literal: `fn ( <parameters> ) { <body> }`.
    ///
    /// Parameters are bare identifiers; the body is an ordinary block. The
    /// resulting value captures its environment only later, at evaluation
    /// time.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::LParen) {
            return None;
        }

        let parameters = self.parse_comma_separated(Self::parse_parameter_name, &Token::RParen)?;

        if !self.expect_peek(&Token::LBrace) {
            return None;
        }

        let body = self.parse_block()?;

        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses one parameter name; the cursor must sit on an identifier.
    fn parse_parameter_name(&mut self) -> Option<String> {
        match self.current() {
            Token::Identifier(name) => Some(name.clone()),
            _ => {
                self.error_expected("IDENT");
                None
            },
        }
    }

    /// Parses an array literal: `[ <elements> ]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements =
            self.parse_comma_separated(|p| p.parse_expression(Precedence::Lowest),
                                       &Token::RBracket)?;

        Some(Expr::ArrayLiteral { elements })
    }

    /// Parses a hash literal: `{ <key>: <value>, ... }`.
    ///
    /// Pairs are kept in source order; whether duplicate keys collapse is
    /// decided at evaluation time, where later pairs overwrite earlier
    /// ones.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !self.peek_is(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }

            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(&Token::RBrace) && !self.expect_peek(&Token::Comma) {
                return None;
            }
        }

        if !self.expect_peek(&Token::RBrace) {
            return None;
        }

        Some(Expr::HashLiteral { pairs })
    }
}
