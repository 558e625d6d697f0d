//! Installer config types and defaults.
//!
//! This module defines enums and default value functions used by the
//! `InstallerConfig` struct.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which part of the installation a render pass produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InstallationKind {
    /// Meta and workspace components together (default).
    #[default]
    Full,
    /// Only the control-plane ("meta") components.
    Meta,
    /// Only the workspace cluster components.
    Workspace,
}

impl InstallationKind {
    /// Whether components registered under `scope` are part of this kind.
    pub fn includes(self, scope: ComponentScope) -> bool {
        match self {
            Self::Full => true,
            Self::Meta => scope == ComponentScope::Meta,
            Self::Workspace => scope == ComponentScope::Workspace,
        }
    }
}

impl fmt::Display for InstallationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Meta => write!(f, "meta"),
            Self::Workspace => write!(f, "workspace"),
        }
    }
}

/// The installation scope a component is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentScope {
    Meta,
    Workspace,
}

impl fmt::Display for ComponentScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meta => write!(f, "meta"),
            Self::Workspace => write!(f, "workspace"),
        }
    }
}

// Default value functions for serde
pub(crate) fn default_namespace() -> String {
    "default".to_string()
}
