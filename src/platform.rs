// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Per-target derivation rules.
//!
//! Every function here is total over string input: a target never fails to
//! map, it only falls back to the Linux runner and empty filters.

/// Bare platform names that select every wheel configuration of a platform.
pub const BARE_PLATFORMS: &[&str] = &["linux", "macos", "windows"];

/// Architecture suffixes recognised for `CIBW_ARCHS`, in match priority order.
pub const ARCHITECTURES: &[&str] = &["aarch64", "arm64", "universal2"];

/// Runner platform a target is built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux runners, also the fallback for unrecognised targets.
    Linux,
    /// macOS runners.
    Macos,
    /// Windows runners.
    Windows,
}

impl Platform {
    /// Selects the runner platform for a target.
    ///
    /// The `macos` check runs before the `win` check, so a target containing
    /// both resolves to macOS.
    ///
    /// # Examples
    ///
    /// ```
    /// use cibw_matrix::Platform;
    ///
    /// assert_eq!(Platform::detect("cp39-macosx_arm64"), Platform::Macos);
    /// assert_eq!(Platform::detect("cp39-win_amd64"), Platform::Windows);
    /// assert_eq!(Platform::detect("cp39-manylinux_x86_64"), Platform::Linux);
    /// ```
    pub fn detect(target: &str) -> Self {
        if target.contains("macos") {
            Self::Macos
        } else if target.contains("win") {
            Self::Windows
        } else {
            Self::Linux
        }
    }

    /// Runner image identifier used for the `os` matrix field.
    pub const fn runner_image(self) -> &'static str {
        match self {
            Self::Linux => "ubuntu-20.04",
            Self::Macos => "macos-10.15",
            Self::Windows => "windows-2019",
        }
    }
}

/// Derives the `CIBW_BUILD` selector for a target.
///
/// Bare platform names build everything and therefore map to an empty
/// selector; any other target selects exactly itself.
pub fn cibw_build(target: &str) -> &str {
    if BARE_PLATFORMS.contains(&target) {
        ""
    } else {
        target
    }
}

/// Derives the `CIBW_ARCHS` selector from the target suffix.
pub fn cibw_archs(target: &str) -> &'static str {
    ARCHITECTURES
        .iter()
        .copied()
        .find(|arch| target.ends_with(arch))
        .unwrap_or("")
}
