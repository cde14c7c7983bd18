//! Desugaring pass.
//!
//! Rewrites the source language's built in `puts` into the target runtime's logging call.
//! Only the callee of a call that forms a whole expression statement is rewritten; every other use of the
//! identifier `puts` is left alone.

use lena_parser::ast::{Expr, Program, Stmt};
use lena_parser::fold::{walk_stmt, Folder};
use tracing::{debug, trace};

/// Name of the source language's print function.
pub const PUTS: &str = "puts";
/// What `puts` is rewritten to.
pub const CONSOLE_LOG: &str = "console.log";

/// Runs the [`Desugarer`] over `program`.
pub fn desugar(program: Program) -> Program {
    let mut desugarer = Desugarer::new();
    let program = desugarer.fold_program(program);
    debug!(rewrites = desugarer.rewrites(), "desugared program");
    program
}

/// Desugaring pass.
#[derive(Debug, Default)]
pub struct Desugarer {
    /// Number of `puts` calls rewritten so far.
    rewrites: usize,
}

impl Desugarer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rewrites(&self) -> usize {
        self.rewrites
    }
}

impl Folder for Desugarer {
    fn fold_stmt(&mut self, stmt: Stmt) -> Stmt {
        // Nested blocks are rewritten first.
        match walk_stmt(self, stmt) {
            Stmt::Expr(Expr::Call { callee, args }) if is_puts(&callee) => {
                trace!(args = args.len(), "rewriting puts call");
                self.rewrites += 1;
                Stmt::Expr(Expr::Call {
                    callee: Box::new(Expr::Identifier(CONSOLE_LOG.to_string())),
                    args,
                })
            }
            stmt => stmt,
        }
    }
}

fn is_puts(callee: &Expr) -> bool {
    matches!(callee, Expr::Identifier(ident) if ident == PUTS)
}
