// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Report output for the workflow step.
//!
//! The step prints the parsed targets and the matrix for humans reading the
//! job log, followed by the legacy `::set-output` workflow command the runner
//! captures into `steps.<id>.outputs.matrix`.

use std::io::Write;

use tracing::info;

use crate::{error::Error, matrix::Matrix};

/// Name of the workflow output carrying the matrix.
pub const MATRIX_OUTPUT: &str = "matrix";

/// Formats a legacy `::set-output` workflow command for the matrix.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when the matrix cannot be
/// encoded.
///
/// # Example
///
/// ```
/// use cibw_matrix::{Matrix, set_output_line};
///
/// let matrix = Matrix::from_targets(&["linux"],);
/// let line = set_output_line("matrix", &matrix,)?;
/// assert!(line.starts_with("::set-output name=matrix::{\"include\": [{\"target\": \"linux\""));
/// # Ok::<(), cibw_matrix::Error>(())
/// ```
pub fn set_output_line(name: &str, matrix: &Matrix) -> Result<String, Error> {
    Ok(format!("::set-output name={name}::{}", matrix.to_compact_json()?))
}

/// Writes the three report blocks: the target list and the matrix as indented
/// JSON, then the `::set-output` line.
///
/// # Errors
///
/// Returns [`Error::Serialize`](Error::Serialize) when encoding fails and
/// [`Error::Output`](Error::Output) when the writer rejects the data.
pub fn write_report<W: Write>(
    writer: &mut W,
    targets: &[String],
    matrix: &Matrix
) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *writer, targets)?;
    writeln!(writer)?;

    serde_json::to_writer_pretty(&mut *writer, matrix)?;
    writeln!(writer)?;

    writeln!(writer, "{}", set_output_line(MATRIX_OUTPUT, matrix)?)?;
    writer.flush()?;

    info!(jobs = matrix.len(), "emitted build matrix");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Write};

    use super::{set_output_line, write_report};
    use crate::{Error, Matrix, parse_targets};

    fn render(targets: &[String]) -> String {
        let matrix = Matrix::from_targets(targets);
        let mut buffer = Cursor::new(Vec::new());
        write_report(&mut buffer, targets, &matrix).expect("report written");
        String::from_utf8(buffer.into_inner()).expect("invalid UTF-8")
    }

    #[test]
    fn empty_input_reports_empty_matrix() {
        let output = render(&[]);
        assert_eq!(
            output,
            "[]\n{\n  \"include\": []\n}\n::set-output name=matrix::{\"include\": []}\n"
        );
    }

    #[test]
    fn single_target_report_layout() {
        let output = render(&["linux".to_owned()]);
        let expected = concat!(
            "[\n",
            "  \"linux\"\n",
            "]\n",
            "{\n",
            "  \"include\": [\n",
            "    {\n",
            "      \"target\": \"linux\",\n",
            "      \"os\": \"ubuntu-20.04\",\n",
            "      \"CIBW_BUILD\": \"\",\n",
            "      \"CIBW_ARCHS\": \"\"\n",
            "    }\n",
            "  ]\n",
            "}\n",
            "::set-output name=matrix::{\"include\": [{\"target\": \"linux\", \"os\": \"ubuntu-20.04\", \"CIBW_BUILD\": \"\", \"CIBW_ARCHS\": \"\"}]}\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn set_output_payload_matches_printed_matrix() {
        let targets = parse_targets("[linux, macos-arm64, win_amd64, manylinux_aarch64]")
            .expect("valid targets");
        let output = render(&targets);

        let line = output
            .lines()
            .find(|line| line.starts_with("::set-output"))
            .expect("missing set-output line");
        let payload = line
            .strip_prefix("::set-output name=matrix::")
            .expect("unexpected output name");
        let decoded: Matrix = serde_json::from_str(payload).expect("payload is JSON");

        assert_eq!(decoded, Matrix::from_targets(&targets));
        assert_eq!(decoded.len(), 4);
        assert!(!payload.contains('\n'));
    }

    #[test]
    fn set_output_line_uses_given_name() {
        let matrix = Matrix::default();
        let line = set_output_line("jobs", &matrix).expect("formatted line");
        assert_eq!(line, "::set-output name=jobs::{\"include\": []}");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_failures_are_reported() {
        let targets = vec!["linux".to_owned()];
        let matrix = Matrix::from_targets(&targets);
        let error = write_report(&mut BrokenPipe, &targets, &matrix).expect_err("write fails");
        assert!(matches!(error, Error::Serialize { .. } | Error::Output { .. }));
    }
}
