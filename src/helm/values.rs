//! Helm value overrides.
//!
//! `ValueOptions` mirrors the override flags the Helm CLI accepts. chartwire
//! never merges these into chart values itself; it only validates their shape
//! and renders them as flags for the engine that applies them.

use crate::error::{ChartwireError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Dotted Helm value path, with optional list indices (`a.b[0].c`).
static VALUE_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-]+(\[\d+\])?(\.[A-Za-z0-9_\-]+(\[\d+\])?)*$")
        .expect("Invalid value key regex")
});

/// Value overrides for one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueOptions {
    /// Whole value files (`-f`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value_files: Vec<String>,

    /// Inline `key=value` overrides (`--set`).
    pub values: Vec<String>,

    /// Inline overrides forced to strings (`--set-string`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub string_values: Vec<String>,

    /// File-sourced `key=path` overrides (`--set-file`).
    pub file_values: Vec<String>,
}

impl ValueOptions {
    /// True when no override of any kind is set.
    pub fn is_empty(&self) -> bool {
        self.value_files.is_empty()
            && self.values.is_empty()
            && self.string_values.is_empty()
            && self.file_values.is_empty()
    }

    /// Check every override has the shape Helm expects.
    pub fn validate(&self) -> Result<()> {
        if self.value_files.iter().any(|f| f.trim().is_empty()) {
            return Err(ChartwireError::ConstructionFailed(
                "value file paths must be non-empty".to_string(),
            ));
        }

        for entry in self.values.iter().chain(&self.string_values) {
            split_override(entry)?;
        }

        for entry in &self.file_values {
            let (_, path) = split_override(entry)?;
            if path.is_empty() {
                return Err(ChartwireError::ConstructionFailed(format!(
                    "file value '{}' has no path",
                    entry
                )));
            }
        }

        Ok(())
    }

    /// Render as Helm CLI flags.
    ///
    /// Order is fixed: value files, `--set`, `--set-string`, `--set-file`.
    pub fn to_helm_args(&self) -> Vec<String> {
        let groups = [
            ("-f", &self.value_files),
            ("--set", &self.values),
            ("--set-string", &self.string_values),
            ("--set-file", &self.file_values),
        ];

        let mut args = Vec::new();
        for (flag, entries) in groups {
            for entry in entries {
                args.push(flag.to_string());
                args.push(entry.clone());
            }
        }
        args
    }
}

/// Split `key=value` and validate the key path.
fn split_override(entry: &str) -> Result<(&str, &str)> {
    let Some((key, value)) = entry.split_once('=') else {
        return Err(ChartwireError::ConstructionFailed(format!(
            "override '{}' must have the form key=value",
            entry
        )));
    };

    if !VALUE_KEY_REGEX.is_match(key) {
        return Err(ChartwireError::ConstructionFailed(format!(
            "override '{}' has an invalid key '{}'",
            entry, key
        )));
    }

    Ok((key, value))
}
