//! jsonvet CLI.
//!
//! Validates that a file holds exactly one UTF-8-encoded JSON document.
//! Exit codes: 0 when the document is valid, 1 when the file cannot be read
//! (or the arguments are wrong), 2 when the document is invalid. Encoding
//! defects and grammar defects stay distinguishable on stderr.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use jsonvet::{serialize, Error};

#[derive(Parser)]
#[command(name = "jsonvet")]
#[command(about = "Validate a UTF-8 encoded JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the JSON document to validate.
    input: PathBuf,

    /// Print the re-serialized document on success.
    #[arg(long)]
    echo: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    debug!(input = ?cli.input);

    let bytes = match fs::read(&cli.input) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("Cannot read {}: {err}", cli.input.display());
            return ExitCode::FAILURE;
        }
    };

    match jsonvet::parse(&bytes) {
        Ok(value) => {
            debug!(kind = value.type_name(), "document is valid");
            if cli.echo {
                println!("{}", serialize(&value));
            }
            ExitCode::SUCCESS
        }
        Err(Error::Json(err)) => {
            eprintln!("Parse error: {err}");
            ExitCode::from(2)
        }
        Err(Error::Unicode(err)) => {
            eprintln!("Unicode error: {err}");
            ExitCode::from(2)
        }
    }
}
