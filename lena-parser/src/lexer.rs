use logos::Logos;
use std::{fmt, ops::Range};

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex("[0-9]+")]
    Int,
    /// The closing quote is optional: an unterminated string runs to the end of input.
    #[regex(r#""[^"]*"?"#)]
    String,

    // identifiers
    #[regex("[a-zA-Z_]+")]
    Ident,

    // unary operators
    #[token("!")]
    Bang,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus, // NOTE: can also be unary
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    // - assignment
    #[token("=")]
    Assign,
    // - equality
    #[token("==")]
    EqualsEquals,
    #[token("!=")]
    NotEquals,
    // - ordering
    #[token(">")]
    GreaterThan,
    #[token("<")]
    LessThan,

    // punctuation
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("[")]
    OpenBracket,
    #[token("]")]
    CloseBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,

    // keywords
    #[token("fn")]
    Fn,
    #[token("let")]
    Let,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("return")]
    Return,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[error]
    Illegal,

    /// Only generated by [`Lexer::next_token`] once the underlying lexer is exhausted.
    Eof,
}

/// Binding power of a token when it appears after a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Unary `!` and `-`
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    Index,
}

impl TokenKind {
    /// Returns the infix precedence of the token.
    /// Tokens that never continue an expression have [`Precedence::Lowest`].
    pub fn precedence(&self) -> Precedence {
        match self {
            TokenKind::EqualsEquals | TokenKind::NotEquals => Precedence::Equals,
            TokenKind::LessThan | TokenKind::GreaterThan => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            TokenKind::OpenParen => Precedence::Call,
            TokenKind::OpenBracket => Precedence::Index,
            _ => Precedence::Lowest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Ident => "IDENT",
            TokenKind::Bang => "!",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => "=",
            TokenKind::EqualsEquals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::GreaterThan => ">",
            TokenKind::LessThan => "<",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semi => ";",
            TokenKind::Colon => ":",
            TokenKind::Fn => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token borrowed from the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// The matched text. For strings, the text between the quotes.
    pub literal: &'a str,
    pub span: Range<usize>,
}

/// Produces [`Token`]s one at a time.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Returns the next token. Once the input is exhausted, every call returns a [`TokenKind::Eof`] token.
    pub fn next_token(&mut self) -> Token<'a> {
        match self.inner.next() {
            Some(kind) => {
                let slice = self.inner.slice();
                let literal = match kind {
                    TokenKind::String => strip_quotes(slice),
                    _ => slice,
                };
                Token {
                    kind,
                    literal,
                    span: self.inner.span(),
                }
            }
            None => {
                let end = self.inner.source().len();
                Token {
                    kind: TokenKind::Eof,
                    literal: "",
                    span: end..end,
                }
            }
        }
    }
}

fn strip_quotes(slice: &str) -> &str {
    let inner = &slice[1..]; // opening quote is always present
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Tokenizes the whole `source`. The result always ends with exactly one [`TokenKind::Eof`] token.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|token| token.kind).collect()
    }

    fn literals(source: &str) -> Vec<&str> {
        tokenize(source)
            .into_iter()
            .map(|token| token.literal)
            .collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("=+-!*/<>==!=,;(){}[]:"),
            vec![
                Assign,
                Plus,
                Minus,
                Bang,
                Asterisk,
                Slash,
                LessThan,
                GreaterThan,
                EqualsEquals,
                NotEquals,
                Comma,
                Semi,
                OpenParen,
                CloseParen,
                OpenBrace,
                CloseBrace,
                OpenBracket,
                CloseBracket,
                Colon,
                Eof
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        assert_eq!(
            kinds("fn let true false if else return five _x lets"),
            vec![Fn, Let, True, False, If, Else, Return, Ident, Ident, Ident, Eof]
        );
        assert_eq!(literals("lets go"), vec!["lets", "go", ""]);
    }

    #[test]
    fn test_program() {
        let source = r#"let add = fn(x, y) {
            x + y;
        };
        let result = add(five, 10);
        {"foo": [1, 2]}"#;
        assert_eq!(
            kinds(source),
            vec![
                Let, Ident, Assign, Fn, OpenParen, Ident, Comma, Ident, CloseParen, OpenBrace,
                Ident, Plus, Ident, Semi, CloseBrace, Semi, Let, Ident, Assign, Ident, OpenParen,
                Ident, Comma, Int, CloseParen, Semi, OpenBrace, String, Colon, OpenBracket, Int,
                Comma, Int, CloseBracket, CloseBrace, Eof
            ]
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(
            literals(r#"10 "foo bar" """#),
            vec!["10", "foo bar", "", ""]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let tokens = tokenize(r#"let s = "abc def"#);
        assert_eq!(tokens[3].kind, String);
        assert_eq!(tokens[3].literal, "abc def");
        assert_eq!(tokens[4].kind, Eof);
        assert_eq!(tokens.len(), 5);
    }

    #[test]
    fn test_illegal() {
        let tokens = tokenize("1 @ 2");
        assert_eq!(tokens[1].kind, Illegal);
        assert_eq!(tokens[1].literal, "@");
        assert_eq!(tokens[1].span, 2..3);
        assert_eq!(tokens.last().map(|token| token.kind), Some(Eof));
    }

    #[test]
    fn test_single_eof() {
        for source in &["", "   \n\t", "let x = 1;", "\"open", "$$$"] {
            let tokens = tokenize(source);
            let eof_count = tokens.iter().filter(|token| token.kind == Eof).count();
            assert_eq!(eof_count, 1, "source: {:?}", source);
            assert_eq!(tokens.last().map(|token| token.kind), Some(Eof));
        }
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, Ident);
        assert_eq!(lexer.next_token().kind, Eof);
        assert_eq!(lexer.next_token().kind, Eof);
        assert_eq!(lexer.next_token().span, 1..1);
    }

    #[test]
    fn test_precedence_order() {
        assert!(Precedence::Lowest < Precedence::Equals);
        assert!(Precedence::Sum < Precedence::Product);
        assert!(Precedence::Call < Precedence::Index);
        assert_eq!(Asterisk.precedence(), Precedence::Product);
        assert_eq!(Semi.precedence(), Precedence::Lowest);
    }
}
