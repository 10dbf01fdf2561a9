//! graphseek - find a hidden vertex in a weighted graph
//!
//! Queries graph medians and narrows the candidates using shortest-path edge
//! feedback, either from a simulated oracle or from answers typed on stdin.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use graphseek_core::error::{ExitCode as SeekExitCode, SeekError};
use graphseek_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return exit_on_parse_error(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(SeekExitCode::Success as u8),
        Err(e) => report_failure(&cli, &e),
    }
}

/// Print a command failure in the requested format and pick the exit code
fn report_failure(cli: &Cli, err: &SeekError) -> ExitCode {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", err.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", err),
        OutputFormat::Human => {}
    }
    ExitCode::from(err.exit_code() as u8)
}

/// Parse failures keep clap's own output unless JSON was asked for.
///
/// `Cli.format` does not exist yet at this point, so argv is scanned directly.
fn exit_on_parse_error(err: clap::Error) -> ExitCode {
    let informational = matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
    if informational || !requests_json(env::args().skip(1)) {
        err.exit();
    }

    let seek_error = SeekError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", seek_error.to_json());
    ExitCode::from(seek_error.exit_code() as u8)
}

fn requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                if args.next().is_some_and(|v| v == "json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_requests_json() {
        assert!(requests_json(args(&["--format", "json", "median"])));
        assert!(requests_json(args(&["median", "--format=json"])));
        assert!(!requests_json(args(&["--format", "human", "median"])));
        assert!(!requests_json(args(&["--format"])));
        assert!(!requests_json(args(&["tree", "json"])));
    }
}
