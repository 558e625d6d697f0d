//! Implementation of the `chartwire components` command.

use crate::context::RenderContext;
use crate::registry::ComponentRegistry;

/// List registered components with their scope and activity.
pub fn cmd_components(registry: &ComponentRegistry, ctx: &RenderContext) -> String {
    let mut out = String::new();

    for (name, component) in registry.entries() {
        let status = if registry.is_active(name, ctx) {
            "active"
        } else {
            "inactive"
        };
        out.push_str(&format!("{:<24} {:<10} {}\n", name, component.scope.to_string(), status));
    }

    if out.is_empty() {
        out.push_str("No components registered.\n");
    }
    out
}
