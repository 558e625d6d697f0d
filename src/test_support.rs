use crate::config::{DEFAULT_CONFIG_FILE, InstallerConfig};
use crate::context::RenderContext;
use std::path::{Path, PathBuf};

/// Context built from an all-defaults config.
pub(crate) fn sample_context() -> RenderContext {
    RenderContext::new(InstallerConfig::default())
}

pub(crate) fn context_with_namespace(namespace: &str) -> RenderContext {
    RenderContext::new(InstallerConfig {
        namespace: namespace.to_string(),
        ..InstallerConfig::default()
    })
}

pub(crate) fn context_with_config(config: InstallerConfig) -> RenderContext {
    config.validate().unwrap();
    RenderContext::new(config)
}

/// Write `chartwire.yaml` into `dir` and return its path.
pub(crate) fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    std::fs::write(&path, yaml)
        .unwrap_or_else(|e| panic!("failed to write {}: {}", path.display(), e));
    path
}
