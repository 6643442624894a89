// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing of the target list supplied through the `--targets` option.
//!
//! The list is a YAML document (a JSON array is accepted as well, being a YAML
//! subset). Scalars are never type-interpreted: `3.10`, `True`, `~` and
//! `0x10` reach the matrix spelled exactly as written.

use serde_yaml::Value;
use tracing::debug;

use crate::error::Error;

/// Parses the raw target list into an ordered sequence of target strings.
///
/// Empty and whitespace-only input yields an empty list, which is the default
/// of the CLI option.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the input is not valid YAML and
/// [`Error::Validation`](Error::Validation) when the document is not a
/// sequence of scalars.
///
/// # Examples
///
/// ```
/// use cibw_matrix::parse_targets;
///
/// let targets = parse_targets("[linux, macos-arm64, 1]",)?;
/// assert_eq!(targets, vec!["linux", "macos-arm64", "1"]);
/// # Ok::<(), cibw_matrix::Error>(())
/// ```
pub fn parse_targets(input: &str) -> Result<Vec<String>, Error> {
    if input.trim().is_empty() {
        debug!("empty targets input, producing an empty list");
        return Ok(Vec::new());
    }

    let document: Value = serde_yaml::from_str(input)?;
    check_shape(&document)?;

    // Deserializing straight into strings keeps the source spelling of each
    // scalar instead of its resolved number, bool or null.
    let targets = serde_yaml::from_str::<Option<Vec<String>>>(input)?.unwrap_or_default();

    debug!(count = targets.len(), "parsed targets");
    Ok(targets)
}

/// Ensures the document is null or a sequence of scalars.
fn check_shape(document: &Value) -> Result<(), Error> {
    let items = match untagged(document) {
        Value::Null => return Ok(()),
        Value::Sequence(items) => items,
        other => {
            return Err(Error::validation(format!(
                "expected a list of targets, found {}",
                describe(other)
            )));
        }
    };

    for (index, item) in items.iter().enumerate() {
        let item = untagged(item);
        if matches!(item, Value::Sequence(_) | Value::Mapping(_)) {
            return Err(Error::validation(format!(
                "target #{index} must be a scalar, found {}",
                describe(item)
            )));
        }
    }

    Ok(())
}

/// Looks through explicit YAML tags to the tagged value.
fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
