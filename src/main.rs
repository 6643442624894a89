// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the cibw-matrix binary.
//!
//! The CLI reads the target list from `--targets`, prints the parsed list and
//! the derived matrix, and emits the `::set-output` line for the workflow.

use std::{io, process};

use cibw_matrix::{Error, Matrix, parse_targets, write_report};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command line interface for generating cibuildwheel build matrices.
#[derive(Debug, Parser)]
#[command(
    name = "cibw-matrix",
    version,
    about = "Load cibuildwheel targets for a GitHub Actions workflow"
)]
struct Cli {
    /// YAML list of build targets, e.g. `[linux, macos-arm64]`.
    #[arg(
        long = "targets",
        value_name = "YAML",
        env = "CIBW_MATRIX_TARGETS",
        default_value = ""
    )]
    targets: String,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main() {
    init_tracing();

    if let Err(error) = run(Cli::parse()) {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Installs a stderr subscriber so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Parses the targets and writes the report to stdout.
///
/// # Errors
///
/// Propagates parse, validation and output errors.
fn run(cli: Cli) -> Result<(), Error> {
    let targets = parse_targets(&cli.targets)?;
    let matrix = Matrix::from_targets(&targets);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &targets, &matrix)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser, error::ErrorKind};

    use super::{Cli, run};

    #[test]
    fn targets_default_to_empty() {
        let command = Cli::command();
        let argument = command
            .get_arguments()
            .find(|argument| argument.get_id() == "targets")
            .expect("missing --targets argument");

        let defaults: Vec<&str> = argument
            .get_default_values()
            .iter()
            .map(|value| value.to_str().expect("utf8 default"))
            .collect();
        assert_eq!(defaults, vec![""]);
    }

    #[test]
    fn accepts_targets_option() {
        let cli = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "--targets",
            "[\"linux\", \"macos-arm64\"]",
        ])
        .expect("failed to parse CLI");

        assert_eq!(cli.targets, "[\"linux\", \"macos-arm64\"]");
    }

    #[test]
    fn rejects_unknown_options() {
        let error = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--target", "linux"])
            .expect_err("expected usage error");
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn targets_option_requires_value() {
        let result = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "--targets"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_reports_malformed_targets() {
        let cli = Cli {
            targets: "[linux".to_owned(),
        };
        let error = run(cli).expect_err("expected parse error");
        assert!(matches!(error, cibw_matrix::Error::Parse { .. }));
    }
}
