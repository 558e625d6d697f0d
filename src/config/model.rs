//! InstallerConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Installer configuration consumed by a render pass.
///
/// This struct represents the contents of `chartwire.yaml`.
/// Unknown fields are preserved in `extra` for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Domain the installation is served from.
    pub domain: String,

    /// Namespace charts are installed into unless a chart overrides it.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Which components this installation renders.
    pub kind: InstallationKind,

    /// Components skipped during render even when their scope matches.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disabled_components: Vec<String>,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            namespace: default_namespace(),
            kind: InstallationKind::default(),
            disabled_components: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}
