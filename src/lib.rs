// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for generating cibuildwheel build matrices.
//!
//! The library parses a YAML list of build targets, derives the runner image
//! and cibuildwheel selectors for each one, and writes the resulting
//! `{"include": [...]}` matrix in the form GitHub Actions workflows consume.

mod error;
mod matrix;
mod platform;
mod report;
mod targets;

pub use error::Error;
pub use matrix::{Matrix, MatrixEntry};
pub use platform::{ARCHITECTURES, BARE_PLATFORMS, Platform, cibw_archs, cibw_build};
pub use report::{MATRIX_OUTPUT, set_output_line, write_report};
pub use targets::parse_targets;
