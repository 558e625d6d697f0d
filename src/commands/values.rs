//! Implementation of the `chartwire values` command.
//!
//! Prints, per chart release, the Helm flags that apply its overrides. A
//! release with no overrides prints its header and `(chart defaults)`.

use crate::cli::ValuesArgs;
use crate::context::RenderContext;
use crate::error::Result;
use crate::registry::ComponentRegistry;

pub fn cmd_values(
    registry: &ComponentRegistry,
    ctx: &RenderContext,
    args: &ValuesArgs,
) -> Result<String> {
    let plan = registry.render_component(&args.component, ctx)?;

    let mut out = String::new();
    for release in &plan.releases {
        out.push_str(&format!(
            "# {} {} (namespace {})\n",
            release.chart.name, release.chart.version, release.namespace
        ));

        if release.values.is_empty() {
            out.push_str("(chart defaults)\n");
        } else {
            for pair in release.values.to_helm_args().chunks(2) {
                out.push_str(&pair.join(" "));
                out.push('\n');
            }
        }
    }

    if plan.releases.is_empty() {
        out.push_str(&format!("{} contributes no charts.\n", plan.name));
    }
    Ok(out)
}
