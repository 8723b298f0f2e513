use crate::{
    ast::{BlockStmt, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - an expression used as a statement.
    ///
    /// Dispatch is by the current token; anything that is not a `let` or
    /// `return` keyword is parsed as an expression statement. On success
    /// the cursor rests on the statement's final token (the `;` when one is
    /// present), so the caller's following advance lands on the next
    /// statement.
    ///
    /// # Returns
    /// The parsed [`Statement`], or `None` with a recorded diagnostic.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current() {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a `let` statement: `let <identifier> = <expression>;`.
    ///
    /// # Errors
    /// Records an `expected next token` diagnostic if the identifier or
    /// `=` is missing, or if the initializer fails to parse.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let name = match self.peek() {
            Token::Identifier(name) => name.clone(),
            _ => {
                self.error_expected("IDENT");
                return None;
            },
        };
        self.advance();

        if !self.expect_peek(&Token::Assign) {
            return None;
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Some(Statement::Let { name, value })
    }

    /// Parses a `return` statement with an optional value.
    ///
    /// `return;`, `return` at the end of a block, and `return <expr>;` are
    /// all accepted.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        if self.peek_is(&Token::Semicolon) {
            self.advance();
            return Some(Statement::Return { value: None });
        }
        if self.peek_is(&Token::RBrace) || self.peek_is(&Token::Eof) {
            return Some(Statement::Return { value: None });
        }

        self.advance();
        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Some(Statement::Return { value: Some(value) })
    }

    /// Parses a bare expression as a statement, with an optional trailing
    /// `;`.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(&Token::Semicolon) {
            self.advance();
        }

        Some(Statement::Expression { expr })
    }

    /// Parses a brace-delimited block of statements.
    ///
    /// On entry the cursor sits on the opening `{`; on success it sits on
    /// the matching `}`. Reaching end of input first records a missing `}`
    /// diagnostic.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> Option<BlockStmt> {
        let mut statements = Vec::new();

        self.advance();
        while !self.current_is(&Token::RBrace) {
            if self.current_is(&Token::Eof) {
                self.error_expected("}");
                return None;
            }

            statements.push(self.parse_statement()?);
            self.advance();
        }

        Some(BlockStmt { statements })
    }
}
