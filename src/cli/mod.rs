//! CLI argument parsing for chartwire.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::InstallationKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Chartwire: declarative third-party chart registration for installer render passes.
///
/// Each registered component maps the installer config to the charts it
/// imports and the value overrides they receive. `render` evaluates every
/// component and prints the resulting plan.
#[derive(Parser, Debug)]
#[command(name = "chartwire")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Installer config file (default: ./chartwire.yaml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the namespace charts are installed into.
    #[arg(short, long, global = true)]
    pub namespace: Option<String>,

    /// Override the installation kind.
    #[arg(short, long, global = true, value_enum)]
    pub kind: Option<InstallationKind>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for chartwire.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the chart plan for the installation.
    ///
    /// Evaluates every active component in registration order and prints
    /// the charts, namespaces and value overrides they produce.
    Render(RenderArgs),

    /// List registered components.
    ///
    /// Shows each component's scope and whether it is active for the
    /// loaded config.
    Components,

    /// Print the Helm override flags for a component's charts.
    Values(ValuesArgs),

    /// Print the effective installer config as YAML.
    Config,
}

/// Output format for rendered plans.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Render only this component (ignores kind and disabled_components).
    #[arg(long)]
    pub component: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

/// Arguments for the `values` command.
#[derive(Parser, Debug)]
pub struct ValuesArgs {
    /// Component name (e.g., agent-smith).
    pub component: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
