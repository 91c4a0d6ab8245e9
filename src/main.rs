// src/main.rs
//
// markdown2html — README-grade Markdown → HTML
//
// Usage: markdown2html <INPUT> <OUTPUT>
//
// - Reads INPUT as UTF-8, converts ATX headings and flat "- " lists, writes OUTPUT
//   (overwriting it). All other lines are copied verbatim.
// - Missing arguments: clap's usage message on stderr, exit 1.
// - INPUT not a regular file: "Missing <INPUT>" on stderr, exit 1.
// - Read/decode/write failure: "error: ..." on stderr, exit 1.
// - RUST_LOG controls log output on stderr (default: warn).

use clap::Parser;
use markdown2html::{convert_file, Error};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI arguments
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Markdown file to convert
    input: PathBuf,

    /// HTML file to write (overwritten if it exists)
    output: PathBuf,

    /// Ignored trailing arguments
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<OsString>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors exit 1 rather than clap's 2; --help/--version still exit 0.
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    if !cli.rest.is_empty() {
        log::debug!("ignoring {} extra argument(s)", cli.rest.len());
    }

    match convert_file(&cli.input, &cli.output) {
        Ok(summary) => {
            log::info!(
                "converted {} -> {} ({} lines in, {} lines out)",
                cli.input.display(),
                cli.output.display(),
                summary.lines_read,
                summary.lines_written
            );
            ExitCode::SUCCESS
        }
        Err(e @ Error::MissingInput { .. }) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
