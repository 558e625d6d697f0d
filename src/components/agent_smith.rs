//! agent-smith: workspace abuse detection, backed by Tetragon.

use crate::charts;
use crate::context::RenderContext;
use crate::error::Result;
use crate::helm::{CompositeHelmFunc, HelmConfig, TemplateConfig, ValueOptions, import_template};

/// Registry name of this component.
pub const COMPONENT: &str = "agent-smith";

/// Tetragon configuration for agent-smith.
///
/// Always enabled with chart defaults. Anything beyond defaults is too
/// complex for inline overrides and belongs in `file_values`.
pub fn tetragon_config(_ctx: &RenderContext) -> Result<Option<HelmConfig>> {
    Ok(Some(HelmConfig {
        enabled: true,
        values: Some(ValueOptions {
            values: Vec::new(),
            file_values: Vec::new(),
            ..ValueOptions::default()
        }),
    }))
}

/// All charts agent-smith imports.
pub fn helm() -> CompositeHelmFunc {
    CompositeHelmFunc::default().push(import_template(
        charts::tetragon(),
        TemplateConfig::default(),
        tetragon_config,
    ))
}
