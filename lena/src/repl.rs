//! Interactive read-eval-print loop. Each line is transpiled on its own.

use crate::{transpile_with, Error};
use lena_codegen::CodegenOptions;
use std::io::{self, BufRead, Write};
use tracing::trace;

pub const PROMPT: &str = ">> ";

/// Runs the loop until `input` is exhausted.
///
/// Prints [`PROMPT`], reads a line, then writes either the generated code followed by a line break or every
/// parse error on its own tab indented line.
pub fn start(input: impl BufRead, mut output: impl Write, options: &CodegenOptions) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        trace!(%line, "read line");

        match transpile_with(&line, options) {
            Ok(code) => writeln!(output, "{}", code)?,
            Err(Error::Syntax(errors)) => print_parser_errors(&mut output, &errors)?,
            Err(err) => writeln!(output, "\t{}", err)?,
        }
    }
}

/// Writes each message on its own line, prefixed with a tab.
pub fn print_parser_errors(output: &mut impl Write, errors: &[String]) -> io::Result<()> {
    for message in errors {
        writeln!(output, "\t{}", message)?;
    }
    Ok(())
}
