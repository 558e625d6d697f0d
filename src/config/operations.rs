//! Config loading, validation, and utility operations.

use super::model::InstallerConfig;
use crate::error::{ChartwireError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// File name looked up in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "chartwire.yaml";

/// DNS-1123 label, the form Kubernetes requires for namespace names.
static NAMESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]{0,61}[a-z0-9])?$").expect("Invalid namespace regex")
});

impl InstallerConfig {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(InstallerConfig)` - Successfully loaded and validated config
    /// * `Err(ChartwireError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ChartwireError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded installer config");
        Self::from_yaml(&content)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must load. Without one, `chartwire.yaml` in `dir` is
    /// used when present, and defaults otherwise.
    pub fn resolve<P: AsRef<Path>>(explicit: Option<&Path>, dir: P) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(fallback)
        } else {
            debug!("no config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        let config: InstallerConfig = if yaml.trim().is_empty() {
            InstallerConfig::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                ChartwireError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ChartwireError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// - `namespace` must be a DNS-1123 label
    /// - `disabled_components` entries must be non-empty, without surrounding whitespace
    pub fn validate(&self) -> Result<()> {
        if self.namespace.is_empty() {
            return Err(ChartwireError::ConfigError(
                "namespace must not be empty".to_string(),
            ));
        }
        if !NAMESPACE_REGEX.is_match(&self.namespace) {
            return Err(ChartwireError::ConfigError(format!(
                "namespace '{}' is not a valid DNS-1123 label",
                self.namespace
            )));
        }

        for component in &self.disabled_components {
            if component.trim().is_empty() {
                return Err(ChartwireError::ConfigError(
                    "disabled_components entries must be non-empty".to_string(),
                ));
            }
            // Names are matched exactly, so padding would silently disable nothing.
            if component.trim() != component {
                return Err(ChartwireError::ConfigError(format!(
                    "disabled_components entry '{}' has surrounding whitespace. Use '{}' instead.",
                    component,
                    component.trim()
                )));
            }
        }

        Ok(())
    }

    /// Whether the named component is switched off in this config.
    pub fn is_component_disabled(&self, name: &str) -> bool {
        self.disabled_components.iter().any(|c| c == name)
    }
}

/// Validate a namespace given outside the config file (e.g. on the command line).
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if NAMESPACE_REGEX.is_match(namespace) {
        Ok(())
    } else {
        Err(ChartwireError::UserError(format!(
            "namespace '{}' is not a valid DNS-1123 label",
            namespace
        )))
    }
}
