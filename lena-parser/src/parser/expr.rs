use super::*;

/// Invoked when a token starts an expression. The current token is the first token of the expression.
type PrefixRule<'a> = fn(&mut Parser<'a>) -> Expr;
/// Invoked when a token follows a parsed expression. The current token is the operator.
type InfixRule<'a> = fn(&mut Parser<'a>, Expr) -> Expr;

/// Rule tables
impl<'a> Parser<'a> {
    fn prefix_rule(kind: TokenKind) -> Option<PrefixRule<'a>> {
        let rule: PrefixRule<'a> = match kind {
            TokenKind::Ident => Self::parse_identifier_expr,
            TokenKind::Int => Self::parse_integer_expr,
            TokenKind::String => Self::parse_string_expr,
            TokenKind::True | TokenKind::False => Self::parse_bool_expr,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expr,
            TokenKind::OpenParen => Self::parse_grouped_expr,
            TokenKind::If => Self::parse_if_expr,
            TokenKind::Fn => Self::parse_fn_expr,
            TokenKind::OpenBracket => Self::parse_array_expr,
            TokenKind::OpenBrace => Self::parse_hash_expr,
            _ => return None,
        };
        Some(rule)
    }

    fn infix_rule(kind: TokenKind) -> Option<InfixRule<'a>> {
        let rule: InfixRule<'a> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::EqualsEquals
            | TokenKind::NotEquals
            | TokenKind::LessThan
            | TokenKind::GreaterThan => Self::parse_infix_expr,
            TokenKind::OpenParen => Self::parse_call_expr,
            TokenKind::OpenBracket => Self::parse_index_expr,
            _ => return None,
        };
        Some(rule)
    }
}

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_precedence`] with [`Precedence::Lowest`].
    pub fn parse_expr(&mut self) -> Expr {
        self.parse_expr_precedence(Precedence::Lowest)
    }

    /// Parses an expression whose operators all bind tighter than `precedence`.
    /// On return, the current token is the last token of the expression.
    pub fn parse_expr_precedence(&mut self, precedence: Precedence) -> Expr {
        if self.depth >= MAX_EXPR_DEPTH {
            self.nested_too_deeply(self.current_token.span.clone());
            return Expr::Error;
        }

        let depth = self.depth;
        self.depth += 1;
        let expr = self.parse_expr_bp(precedence);
        self.depth = depth;
        expr
    }

    fn parse_expr_bp(&mut self, precedence: Precedence) -> Expr {
        let prefix = match Self::prefix_rule(self.current_token.kind) {
            Some(rule) => rule,
            None => {
                self.error(
                    format!(
                        "no prefix parse function for {} found",
                        self.current_token.kind
                    ),
                    self.current_token.span.clone(),
                );
                return Expr::Error;
            }
        };
        let mut lhs = prefix(self);

        while !self.peek_is(TokenKind::Semi) && precedence < self.peek_precedence() {
            let infix = match Self::infix_rule(self.peek_token.kind) {
                Some(rule) => rule,
                None => break, // not an operator, stop parsing
            };
            // every application nests `lhs` one level deeper
            if self.depth >= MAX_EXPR_DEPTH {
                self.nested_too_deeply(self.peek_token.span.clone());
                return Expr::Error;
            }
            self.depth += 1;
            self.next_token();
            lhs = infix(self, lhs);
        }

        lhs
    }

    fn nested_too_deeply(&self, span: std::ops::Range<usize>) {
        self.error("expression nested too deeply".to_string(), span);
    }

    /* Expressions.Literals */
    fn parse_identifier_expr(&mut self) -> Expr {
        Expr::Identifier(self.current_token.literal.to_string())
    }

    fn parse_integer_expr(&mut self) -> Expr {
        match self.current_token.literal.parse() {
            Ok(val) => Expr::IntegerLit(val),
            Err(_) => {
                self.error(
                    format!("could not parse {:?} as integer", self.current_token.literal),
                    self.current_token.span.clone(),
                );
                Expr::Error
            }
        }
    }

    fn parse_string_expr(&mut self) -> Expr {
        Expr::StringLit(self.current_token.literal.to_string())
    }

    fn parse_bool_expr(&mut self) -> Expr {
        Expr::BoolLit(self.cur_is(TokenKind::True))
    }

    /// Parses `[a, b, c]`.
    fn parse_array_expr(&mut self) -> Expr {
        match self.parse_expr_list(TokenKind::CloseBracket) {
            Some(elements) => Expr::ArrayLit(elements),
            None => Expr::Error,
        }
    }

    /// Parses `{key: value, ...}`. Pairs are kept in source order.
    fn parse_hash_expr(&mut self) -> Expr {
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::CloseBrace) {
            self.next_token();
            let key = self.parse_expr();
            if !self.expect_peek(TokenKind::Colon) {
                return Expr::Error;
            }
            self.next_token();
            let value = self.parse_expr();
            pairs.push((key, value));

            if !self.peek_is(TokenKind::CloseBrace) && !self.expect_peek(TokenKind::Comma) {
                return Expr::Error;
            }
        }

        if !self.expect_peek(TokenKind::CloseBrace) {
            return Expr::Error;
        }
        Expr::HashLit(pairs)
    }

    /* Expressions.Operators */
    fn parse_prefix_expr(&mut self) -> Expr {
        let op = self.current_token.kind;
        self.next_token();
        Expr::Prefix {
            op,
            arg: Box::new(self.parse_expr_precedence(Precedence::Prefix)),
        }
    }

    fn parse_infix_expr(&mut self, lhs: Expr) -> Expr {
        let op = self.current_token.kind;
        let precedence = op.precedence();
        self.next_token();
        let rhs = self.parse_expr_precedence(precedence);
        Expr::Infix {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    fn parse_grouped_expr(&mut self) -> Expr {
        self.next_token();
        let expr = self.parse_expr();
        if !self.expect_peek(TokenKind::CloseParen) {
            return Expr::Error;
        }
        expr
    }

    /// Parses `f(a, b)`. The current token is `(`.
    fn parse_call_expr(&mut self, callee: Expr) -> Expr {
        match self.parse_expr_list(TokenKind::CloseParen) {
            Some(args) => Expr::Call {
                callee: Box::new(callee),
                args,
            },
            None => Expr::Error,
        }
    }

    /// Parses `a[i]`. The current token is `[`.
    fn parse_index_expr(&mut self, collection: Expr) -> Expr {
        self.next_token();
        let index = self.parse_expr();
        if !self.expect_peek(TokenKind::CloseBracket) {
            return Expr::Error;
        }
        Expr::Index {
            collection: Box::new(collection),
            index: Box::new(index),
        }
    }

    /* Expressions.Control */
    /// Parses `if (condition) { ... }` with an optional `else { ... }`.
    fn parse_if_expr(&mut self) -> Expr {
        if !self.expect_peek(TokenKind::OpenParen) {
            return Expr::Error;
        }
        self.next_token();
        let condition = self.parse_expr();

        if !self.expect_peek(TokenKind::CloseParen) || !self.expect_peek(TokenKind::OpenBrace) {
            return Expr::Error;
        }
        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            if !self.expect_peek(TokenKind::OpenBrace) {
                return Expr::Error;
            }
            Some(self.parse_block())
        } else {
            None
        };

        Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }

    /// Parses `fn(a, b) { ... }`.
    fn parse_fn_expr(&mut self) -> Expr {
        if !self.expect_peek(TokenKind::OpenParen) {
            return Expr::Error;
        }
        let params = match self.parse_fn_params() {
            Some(params) => params,
            None => return Expr::Error,
        };
        if !self.expect_peek(TokenKind::OpenBrace) {
            return Expr::Error;
        }
        let body = self.parse_block();

        Expr::FnLit { params, body }
    }
}

/// List utilities
impl<'a> Parser<'a> {
    /// Parses comma separated identifiers up to and including `)`. The current token is `(`.
    fn parse_fn_params(&mut self) -> Option<Vec<String>> {
        let mut params = Vec::new();
        if self.peek_is(TokenKind::CloseParen) {
            self.next_token();
            return Some(params);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(self.current_token.literal.to_string());

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        if self.expect_peek(TokenKind::CloseParen) {
            Some(params)
        } else {
            None
        }
    }

    /// Parses comma separated expressions up to and including `end`.
    /// The current token is the opening punctuation.
    fn parse_expr_list(&mut self, end: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();
        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expr());
        while self.peek_is(TokenKind::Comma) {
            self.next_token(); // eat `,`
            self.next_token();
            list.push(self.parse_expr());
        }

        if self.expect_peek(end) {
            Some(list)
        } else {
            None
        }
    }
}
