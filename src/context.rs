//! Render context for chartwire.
//!
//! A `RenderContext` is the immutable input every configuration provider
//! receives during a render pass. It is built once by the driver (the CLI or
//! a caller embedding the registry) and only borrowed afterwards.

use crate::config::{InstallationKind, InstallerConfig};

/// Read-only environment for one installer render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    config: InstallerConfig,
}

impl RenderContext {
    /// Build a context from a validated installer config.
    ///
    /// Command-line overrides are applied to the config before this, so the
    /// context and the config it exposes always agree.
    pub fn new(config: InstallerConfig) -> Self {
        Self { config }
    }

    /// The installer config this pass renders.
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Namespace charts land in unless their template config overrides it.
    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    /// Installation kind shorthand.
    pub fn kind(&self) -> InstallationKind {
        self.config.kind
    }
}
