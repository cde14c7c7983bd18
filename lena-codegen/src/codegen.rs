//! Lowers AST into JavaScript source text.

use crate::error::{CodegenError, CodegenResult};
use lena_parser::ast::{Block, Expr, Program, Stmt};
use tracing::{debug, trace};

/// Which statements of a `{ ... }` block end up in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStyle {
    /// Only the last statement. The statements before it are dropped.
    LastStatement,
    /// Every statement, one per line.
    AllStatements,
}

impl Default for BlockStyle {
    fn default() -> Self {
        BlockStyle::LastStatement
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodegenOptions {
    pub block_style: BlockStyle,
}

/// Generate JavaScript from an abstract syntax tree.
///
/// The tree is expected to come from a parse without errors. The `puts` rewrite is not done here, run
/// `lena_passes::desugar` first.
#[derive(Debug, Clone, Default)]
pub struct Codegen {
    options: CodegenOptions,
}

impl Codegen {
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    /// Returns the text of every top level statement, each followed by a line break.
    pub fn generate(&self, program: &Program) -> CodegenResult<String> {
        let mut output = String::new();
        for stmt in &program.statements {
            output.push_str(&self.codegen_stmt(stmt)?);
            output.push('\n');
        }

        debug!(
            statements = program.statements.len(),
            bytes = output.len(),
            "generated program"
        );
        Ok(output)
    }

    fn codegen_stmt(&self, stmt: &Stmt) -> CodegenResult<String> {
        let code = match stmt {
            Stmt::Let { ident, value } => format!("let {} = {};", ident, self.codegen_expr(value)?),
            Stmt::Return(expr) => format!("return {};", self.codegen_expr(expr)?),
            Stmt::Expr(expr) => self.codegen_expr(expr)?,
        };
        trace!(%code, "generated statement");
        Ok(code)
    }

    fn codegen_block(&self, block: &Block) -> CodegenResult<String> {
        match self.options.block_style {
            BlockStyle::LastStatement => match block.statements.last() {
                Some(stmt) => self.codegen_stmt(stmt),
                None => Ok(String::new()),
            },
            BlockStyle::AllStatements => Ok(block
                .statements
                .iter()
                .map(|stmt| self.codegen_stmt(stmt))
                .collect::<CodegenResult<Vec<_>>>()?
                .join("\n")),
        }
    }

    fn codegen_expr(&self, expr: &Expr) -> CodegenResult<String> {
        let code = match expr {
            Expr::Identifier(ident) => ident.clone(),
            Expr::IntegerLit(val) => val.to_string(),
            Expr::BoolLit(val) => val.to_string(),
            // NOTE: emitted as written, without escaping
            Expr::StringLit(val) => format!("\"{}\"", val),
            Expr::Prefix { op, arg } => format!("({}{})", op.as_str(), self.codegen_expr(arg)?),
            Expr::Infix { lhs, op, rhs } => format!(
                "({} {} {})",
                self.codegen_expr(lhs)?,
                op.as_str(),
                self.codegen_expr(rhs)?
            ),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                let condition = self.codegen_expr(condition)?;
                let consequence = self.codegen_block(consequence)?;
                match alternative {
                    Some(alternative) => format!(
                        "if ({}) {{\n{}\n}} else {{\n{}\n}}",
                        condition,
                        consequence,
                        self.codegen_block(alternative)?
                    ),
                    None => format!("if ({}) {{\n{}\n}}", condition, consequence),
                }
            }
            Expr::FnLit { params, body } => format!(
                "function({}) {{\n{}\n}}",
                params.join(", "),
                self.codegen_block(body)?
            ),
            Expr::Call { callee, args } => {
                format!("{}({})", self.codegen_expr(callee)?, self.codegen_list(args)?)
            }
            Expr::ArrayLit(elements) => format!("[{}]", self.codegen_list(elements)?),
            Expr::Index { collection, index } => format!(
                "{}[{}]",
                self.codegen_expr(collection)?,
                self.codegen_expr(index)?
            ),
            Expr::HashLit(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| {
                        Ok(format!(
                            "{}: {}",
                            self.codegen_expr(key)?,
                            self.codegen_expr(value)?
                        ))
                    })
                    .collect::<CodegenResult<Vec<_>>>()?;
                format!("{{{}}}", pairs.join(", "))
            }
            Expr::Error => return Err(CodegenError::UnexpectedNode { node: "error" }),
        };
        Ok(code)
    }

    /// Comma separated expressions.
    fn codegen_list(&self, exprs: &[Expr]) -> CodegenResult<String> {
        Ok(exprs
            .iter()
            .map(|expr| self.codegen_expr(expr))
            .collect::<CodegenResult<Vec<_>>>()?
            .join(", "))
    }
}

/// Generates JavaScript for `program` with the default [`CodegenOptions`].
pub fn generate(program: &Program) -> CodegenResult<String> {
    Codegen::default().generate(program)
}
