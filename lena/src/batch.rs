//! Whole-file transpilation, as done by `lena FILE` and `lena -`.

use crate::{repl::print_parser_errors, transpile_with, Error, LenaResult};
use lena_codegen::CodegenOptions;
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};
use tracing::debug;

/// Opens `path` for reading. `-` stands for standard input.
pub fn open(path: &Path) -> io::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

/// Transpiles everything `input` holds.
///
/// The generated code goes to `output` as is. If the source does not parse, nothing is written to
/// `output`; every message goes to `diagnostics` on its own tab indented line and [`Error::Syntax`] is
/// returned.
pub fn run(
    mut input: impl Read,
    mut output: impl Write,
    mut diagnostics: impl Write,
    options: &CodegenOptions,
) -> LenaResult<()> {
    let mut source = String::new();
    input.read_to_string(&mut source)?;
    debug!(bytes = source.len(), "transpiling");

    match transpile_with(&source, options) {
        Ok(code) => {
            output.write_all(code.as_bytes())?;
            output.flush()?;
            Ok(())
        }
        Err(Error::Syntax(errors)) => {
            print_parser_errors(&mut diagnostics, &errors)?;
            Err(Error::Syntax(errors))
        }
        Err(err) => Err(err),
    }
}
