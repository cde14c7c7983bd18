use crate::ast::{Expr, Program, Stmt};
use crate::lexer::{Lexer, Precedence, Token, TokenKind};
use lena_source::{Source, SyntaxError};
use std::mem;

mod expr;
mod stmt;

/// How deeply expressions may nest before the parser gives up on them.
/// Keeps the recursion of later tree walks bounded.
pub const MAX_EXPR_DEPTH: usize = 256;

/// Pratt parser with one token of lookahead.
///
/// Errors are not fatal: every malformed construct is recorded in the [`Source`] and parsing resumes
/// after the offending token, so one pass reports as many problems as possible.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token<'a>,
    /// Cached token for peeking.
    peek_token: Token<'a>,
    /// Source code
    source: &'a Source<'a>,
    /// Nesting of the expression being parsed. Bounded by [`MAX_EXPR_DEPTH`].
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a Source<'a>) -> Self {
        let mut lexer = Lexer::new(source.content);
        let current_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            current_token,
            peek_token,
            source,
            depth: 0,
        }
    }

    /// Parses statements until the end of input.
    /// Statements that failed to parse are left out; check the [`Source`] errors before using the result.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_stmt() {
                statements.push(stmt);
            }
            self.next_token();
        }
        Program { statements }
    }
}

/// Parse utilities
impl<'a> Parser<'a> {
    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current_token = mem::replace(&mut self.peek_token, next);
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    fn peek_precedence(&self) -> Precedence {
        self.peek_token.kind.precedence()
    }

    /// Advances if the peek token is of kind `kind`. Records an error and stays put otherwise.
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.error(
                format!(
                    "expected next token to be {}, got {} instead",
                    kind, self.peek_token.kind
                ),
                self.peek_token.span.clone(),
            );
            false
        }
    }

    fn error(&self, message: String, span: std::ops::Range<usize>) {
        self.source.errors.add_error(SyntaxError::new(message, span))
    }
}
