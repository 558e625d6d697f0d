//! Command implementations for chartwire.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, and the shared setup every command needs: resolving the
//! installer config and building the render context.

mod components;
mod render;
mod values;

use crate::cli::{Cli, Command};
use crate::config::{InstallationKind, InstallerConfig, validate_namespace};
use crate::context::RenderContext;
use crate::error::{ChartwireError, Result};
use crate::registry::ComponentRegistry;
use std::path::{Path, PathBuf};

/// Global flags that shape the render context.
#[derive(Debug, Default)]
pub struct ContextOptions {
    pub config: Option<PathBuf>,
    pub namespace: Option<String>,
    pub kind: Option<InstallationKind>,
}

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let options = ContextOptions {
        config: cli.config,
        namespace: cli.namespace,
        kind: cli.kind,
    };

    let cwd = std::env::current_dir().map_err(|e| {
        ChartwireError::UserError(format!("failed to get current working directory: {}", e))
    })?;
    let ctx = build_context(&options, &cwd)?;
    let registry = ComponentRegistry::with_defaults()?;

    let output = match cli.command {
        Command::Render(args) => render::cmd_render(&registry, &ctx, &args)?,
        Command::Components => components::cmd_components(&registry, &ctx),
        Command::Values(args) => values::cmd_values(&registry, &ctx, &args)?,
        Command::Config => ctx.config().to_yaml()?,
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Resolve the config and apply command-line overrides.
pub fn build_context(options: &ContextOptions, cwd: &Path) -> Result<RenderContext> {
    let mut config = InstallerConfig::resolve(options.config.as_deref(), cwd)?;

    if let Some(kind) = options.kind {
        config.kind = kind;
    }

    if let Some(namespace) = &options.namespace {
        validate_namespace(namespace)?;
        config.namespace = namespace.clone();
    }

    Ok(RenderContext::new(config))
}
