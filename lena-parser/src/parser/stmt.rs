use super::*;
use crate::ast::Block;

impl<'a> Parser<'a> {
    /// Parses a statement.
    /// Returns `None` if the statement is malformed. The error has already been recorded.
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.current_token.kind {
            TokenKind::Let => self.parse_let_stmt(),
            TokenKind::Return => self.parse_return_stmt(),
            _ => {
                // expression statement
                let expr = self.parse_expr();
                self.eat_optional_semi();
                Some(Stmt::Expr(expr))
            }
        }
    }

    /// Parses statements up to the matching `}`. The current token is `{`.
    /// An unterminated block ends at the end of input.
    pub fn parse_block(&mut self) -> Block {
        self.next_token(); // eat `{`

        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::CloseBrace) && !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Block { statements }
    }

    fn parse_let_stmt(&mut self) -> Option<Stmt> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let ident = self.current_token.literal.to_string();
        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }
        self.next_token();
        let value = self.parse_expr();
        self.eat_optional_semi();
        Some(Stmt::Let { ident, value })
    }

    fn parse_return_stmt(&mut self) -> Option<Stmt> {
        self.next_token(); // eat `return`
        let expr = self.parse_expr();
        self.eat_optional_semi();
        Some(Stmt::Return(expr))
    }

    fn eat_optional_semi(&mut self) {
        if self.peek_is(TokenKind::Semi) {
            self.next_token();
        }
    }
}
