// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Matrix types consumed by the GitHub Actions `strategy.matrix` input.
//!
//! Field names and their order are part of the workflow contract: jobs read
//! `matrix.os`, `matrix.CIBW_BUILD` and `matrix.CIBW_ARCHS` verbatim.

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use tracing::debug;

use crate::{
    error::Error,
    platform::{Platform, cibw_archs, cibw_build},
};

/// One job of the build matrix.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatrixEntry {
    /// Target identifier exactly as supplied.
    pub target:     String,
    /// Runner image the job executes on.
    pub os:         String,
    /// cibuildwheel build selector; empty builds every wheel of the platform.
    #[serde(rename = "CIBW_BUILD")]
    pub cibw_build: String,
    /// cibuildwheel architecture selector; empty keeps the runner default.
    #[serde(rename = "CIBW_ARCHS")]
    pub cibw_archs: String,
}

impl MatrixEntry {
    /// Derives the matrix job for a single target.
    ///
    /// # Examples
    ///
    /// ```
    /// use cibw_matrix::MatrixEntry;
    ///
    /// let entry = MatrixEntry::from_target("macos-arm64",);
    /// assert_eq!(entry.os, "macos-10.15");
    /// assert_eq!(entry.cibw_build, "macos-arm64");
    /// assert_eq!(entry.cibw_archs, "arm64");
    /// ```
    pub fn from_target(target: &str) -> Self {
        let platform = Platform::detect(target);
        let entry = Self {
            target:     target.to_owned(),
            os:         platform.runner_image().to_owned(),
            cibw_build: cibw_build(target).to_owned(),
            cibw_archs: cibw_archs(target).to_owned(),
        };

        debug!(
            job = %entry.target,
            os = %entry.os,
            build = %entry.cibw_build,
            archs = %entry.cibw_archs,
            "derived matrix entry"
        );
        entry
    }
}

/// Build matrix serialized as `{"include": [...]}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Matrix {
    /// Jobs in the same order as the input targets.
    pub include: Vec<MatrixEntry>,
}

impl Matrix {
    /// Builds one entry per target, preserving input order and duplicates.
    pub fn from_targets<S>(targets: &[S]) -> Self
    where
        S: AsRef<str>
    {
        let include = targets
            .iter()
            .map(|target| MatrixEntry::from_target(target.as_ref()))
            .collect();

        Self {
            include,
        }
    }

    /// Number of jobs in the matrix.
    pub fn len(&self) -> usize {
        self.include.len()
    }

    /// Returns `true` when the matrix contains no jobs.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Encodes the matrix as single-line JSON using `", "` and `": "`
    /// separators, e.g. `{"include": []}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`](Error::Serialize) when encoding fails.
    pub fn to_compact_json(&self) -> Result<String, Error> {
        let mut buffer = Vec::with_capacity(128);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
        self.serialize(&mut serializer)?;

        // serde_json only ever writes UTF-8.
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Single-line formatter with a space after every `,` and `:`.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write
    {
        writer.write_all(b": ")
    }
}
