//! Installer configuration for chartwire.
//!
//! This module defines the `InstallerConfig` struct that represents
//! `chartwire.yaml`. It supports forward-compatible YAML parsing (unknown
//! fields are kept), defaults for every field, and validation.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::InstallerConfig;
pub use operations::{DEFAULT_CONFIG_FILE, validate_namespace};
pub use types::{ComponentScope, InstallationKind};
