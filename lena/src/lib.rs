//! lena to JavaScript transpiler.
//!
//! Ties the phases together: [`lena_parser::parse`], [`lena_passes::desugar::desugar`] and
//! [`lena_codegen::Codegen`].

pub mod batch;
pub mod repl;

use lena_codegen::{Codegen, CodegenError, CodegenOptions};
use lena_parser::parse;
use lena_passes::desugar::desugar;
use std::io;
use thiserror::Error;
use tracing::debug;

pub use lena_codegen::BlockStyle;

/// The result of a transpilation.
pub type LenaResult<T> = Result<T, Error>;

/// An error that occurred while transpiling.
#[derive(Debug, Error)]
pub enum Error {
    /// The source did not parse. Holds every message, in the order they were found.
    #[error("found {} syntax error(s)", .0.len())]
    Syntax(Vec<String>),

    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// The source could not be read or the output could not be written.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Transpiles `source` with the default [`CodegenOptions`].
pub fn transpile(source: &str) -> LenaResult<String> {
    transpile_with(source, &CodegenOptions::default())
}

/// Transpiles `source`. No code is generated if parsing reported any error.
pub fn transpile_with(source: &str, options: &CodegenOptions) -> LenaResult<String> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        debug!(errors = errors.len(), "parse failed");
        return Err(Error::Syntax(errors));
    }

    let program = desugar(program);
    let code = Codegen::new(options.clone()).generate(&program)?;
    Ok(code)
}
