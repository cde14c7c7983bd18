use anyhow::{bail, Context};
use clap::Parser;
use lena::{batch, repl, BlockStyle, Error};
use lena_codegen::CodegenOptions;
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// Transpiles lena source code to JavaScript.
#[derive(Debug, Parser)]
#[command(name = "lena", version)]
struct LenaArgs {
    /// Source file to transpile, `-` for standard input. Starts the REPL if omitted.
    file: Option<PathBuf>,

    /// Emit every statement of a block instead of only the last one.
    #[arg(long)]
    all_block_statements: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging. Only warnings by default so the generated code is not interleaved with logs.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = LenaArgs::parse();
    let options = CodegenOptions {
        block_style: if args.all_block_statements {
            BlockStyle::AllStatements
        } else {
            BlockStyle::LastStatement
        },
    };

    let path = match args.file {
        Some(path) => path,
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::start(stdin.lock(), stdout.lock(), &options)?;
            return Ok(());
        }
    };

    let input = batch::open(&path).with_context(|| format!("cannot read {}", path.display()))?;
    tracing::debug!(path = %path.display(), "transpiling");

    let stdout = io::stdout();
    match batch::run(input, stdout.lock(), io::stderr(), &options) {
        Ok(()) => Ok(()),
        Err(Error::Syntax(errors)) => {
            bail!("{}: found {} syntax error(s)", path.display(), errors.len())
        }
        Err(err) => Err(err).with_context(|| format!("cannot transpile {}", path.display())),
    }
}
