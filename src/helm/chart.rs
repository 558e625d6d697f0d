//! Chart references and per-import template settings.

use serde::{Deserialize, Serialize};

/// A pre-packaged external chart, referenced but never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub name: String,
    pub repository: String,
    pub version: String,
}

impl Chart {
    pub fn new(name: &str, repository: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            repository: repository.to_string(),
            version: version.to_string(),
        }
    }
}

/// Settings applied when a chart is imported into a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Install into this namespace instead of the render context's.
    pub namespace: Option<String>,
}

/// One chart to install, with the namespace and overrides it gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRelease {
    pub chart: Chart,
    pub namespace: String,
    pub values: super::ValueOptions,
}
