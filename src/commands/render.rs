//! Implementation of the `chartwire render` command.

use crate::cli::{OutputFormat, RenderArgs};
use crate::context::RenderContext;
use crate::error::Result;
use crate::registry::{ComponentRegistry, RenderPlan};

/// Render the whole installation, or a single component, and format it.
pub fn cmd_render(
    registry: &ComponentRegistry,
    ctx: &RenderContext,
    args: &RenderArgs,
) -> Result<String> {
    let plan = match &args.component {
        Some(name) => RenderPlan {
            namespace: ctx.namespace().to_string(),
            kind: ctx.kind(),
            components: vec![registry.render_component(name, ctx)?],
        },
        None => registry.render(ctx)?,
    };

    match args.format {
        OutputFormat::Yaml => plan.to_yaml(),
        OutputFormat::Json => plan.to_json(),
    }
}
