use crate::lexer::TokenKind;

/// The root of the tree. Created once per parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A `{ ... }` block. Only appears as the body of an `if` branch or a function literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `let ident = value;`
    Let { ident: String, value: Expr },
    /// `return value;`
    Return(Expr),
    /// An expression followed by an optional `;`.
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An identifier (e.g. `foo`).
    Identifier(String),
    IntegerLit(i64),
    BoolLit(bool),
    /// Text between the quotes, as written.
    StringLit(String),
    /// A unary expression (e.g. `-1` or `!ok`).
    Prefix { op: TokenKind, arg: Box<Expr> },
    /// A binary expression (e.g. `1 + 1`).
    Infix {
        lhs: Box<Expr>,
        op: TokenKind,
        rhs: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    FnLit { params: Vec<String>, body: Block },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    ArrayLit(Vec<Expr>),
    /// `collection[index]`
    Index {
        collection: Box<Expr>,
        index: Box<Expr>,
    },
    /// Key/value pairs in source order.
    HashLit(Vec<(Expr, Expr)>),
    /// Placeholder for an expression that failed to parse. The error is recorded in the `Source`.
    Error,
}
