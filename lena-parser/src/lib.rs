//! Front end for the lena language: tokens, syntax tree and parser.

pub mod ast;
pub mod fold;
pub mod lexer;
pub mod parser;

pub use lena_source::{Source, SyntaxError};

use ast::Program;
use parser::Parser;

/// Parses `source` into a [`Program`].
/// Returns the error messages in the order they were found. The program is only meaningful if there are none.
pub fn parse(source: &str) -> (Program, Vec<String>) {
    let source = Source::new(source);
    let program = Parser::new(&source).parse_program();
    (program, source.errors.messages())
}
