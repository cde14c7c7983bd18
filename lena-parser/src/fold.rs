//! Folder pattern for AST nodes.
//!
//! A [`Folder`] consumes a tree and returns a rebuilt one. The default methods rebuild every node unchanged,
//! so a pass only overrides the node kinds it rewrites.

use crate::ast::{Block, Expr, Program, Stmt};

pub trait Folder: Sized {
    fn fold_program(&mut self, program: Program) -> Program {
        walk_program(self, program)
    }
    fn fold_block(&mut self, block: Block) -> Block {
        walk_block(self, block)
    }
    fn fold_stmt(&mut self, stmt: Stmt) -> Stmt {
        walk_stmt(self, stmt)
    }
    fn fold_expr(&mut self, expr: Expr) -> Expr {
        walk_expr(self, expr)
    }
}

/// Iteratively fold all statements in a `Vec<Stmt>`.
macro_rules! fold_stmt_list {
    ($folder: expr, $body: expr) => {
        $body
            .into_iter()
            .map(|stmt| Folder::fold_stmt($folder, stmt))
            .collect()
    };
}

pub fn walk_program(folder: &mut impl Folder, program: Program) -> Program {
    Program {
        statements: fold_stmt_list!(folder, program.statements),
    }
}

pub fn walk_block(folder: &mut impl Folder, block: Block) -> Block {
    Block {
        statements: fold_stmt_list!(folder, block.statements),
    }
}

pub fn walk_stmt(folder: &mut impl Folder, stmt: Stmt) -> Stmt {
    match stmt {
        Stmt::Let { ident, value } => Stmt::Let {
            ident,
            value: folder.fold_expr(value),
        },
        Stmt::Return(expr) => Stmt::Return(folder.fold_expr(expr)),
        Stmt::Expr(expr) => Stmt::Expr(folder.fold_expr(expr)),
    }
}

pub fn walk_expr(folder: &mut impl Folder, expr: Expr) -> Expr {
    match expr {
        Expr::Identifier(_)
        | Expr::IntegerLit(_)
        | Expr::BoolLit(_)
        | Expr::StringLit(_)
        | Expr::Error => expr,
        Expr::Prefix { op, arg } => Expr::Prefix {
            op,
            arg: fold_boxed(folder, arg),
        },
        Expr::Infix { lhs, op, rhs } => Expr::Infix {
            lhs: fold_boxed(folder, lhs),
            op,
            rhs: fold_boxed(folder, rhs),
        },
        Expr::If {
            condition,
            consequence,
            alternative,
        } => Expr::If {
            condition: fold_boxed(folder, condition),
            consequence: folder.fold_block(consequence),
            alternative: alternative.map(|block| folder.fold_block(block)),
        },
        Expr::FnLit { params, body } => Expr::FnLit {
            params,
            body: folder.fold_block(body),
        },
        Expr::Call { callee, args } => Expr::Call {
            callee: fold_boxed(folder, callee),
            args: args.into_iter().map(|arg| folder.fold_expr(arg)).collect(),
        },
        Expr::ArrayLit(elements) => Expr::ArrayLit(
            elements
                .into_iter()
                .map(|element| folder.fold_expr(element))
                .collect(),
        ),
        Expr::Index { collection, index } => Expr::Index {
            collection: fold_boxed(folder, collection),
            index: fold_boxed(folder, index),
        },
        Expr::HashLit(pairs) => Expr::HashLit(
            pairs
                .into_iter()
                .map(|(key, value)| (folder.fold_expr(key), folder.fold_expr(value)))
                .collect(),
        ),
    }
}

fn fold_boxed(folder: &mut impl Folder, expr: Box<Expr>) -> Box<Expr> {
    Box::new(folder.fold_expr(*expr))
}
