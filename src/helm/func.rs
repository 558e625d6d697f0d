//! Chart-import functions and their composition.
//!
//! A `HelmFunc` turns a render context into the chart releases a component
//! contributes. `import_template` builds one from a chart and a configuration
//! provider; `CompositeHelmFunc` chains several into one unit.

use super::{Chart, ChartRelease, TemplateConfig, ValueOptions};
use crate::context::RenderContext;
use crate::error::Result;
use tracing::debug;

/// Enablement and value overrides produced for one chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelmConfig {
    pub enabled: bool,
    pub values: Option<ValueOptions>,
}

/// Anything that maps a render context to chart releases.
///
/// Implementations must be pure: the same context yields the same releases.
pub trait HelmFunc: Send + Sync {
    fn render(&self, ctx: &RenderContext) -> Result<Vec<ChartRelease>>;
}

impl<F> HelmFunc for F
where
    F: Fn(&RenderContext) -> Result<Vec<ChartRelease>> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext) -> Result<Vec<ChartRelease>> {
        self(ctx)
    }
}

/// Owned, type-erased `HelmFunc`.
pub type BoxedHelmFunc = Box<dyn HelmFunc>;

/// Import `chart`, configured per render pass by `provider`.
///
/// The provider returning `None`, or a disabled config, contributes nothing.
/// Provider errors propagate unchanged; malformed overrides fail as
/// `ConstructionFailed`.
pub fn import_template<P>(chart: Chart, template: TemplateConfig, provider: P) -> impl HelmFunc
where
    P: Fn(&RenderContext) -> Result<Option<HelmConfig>> + Send + Sync,
{
    move |ctx: &RenderContext| -> Result<Vec<ChartRelease>> {
        let Some(config) = provider(ctx)? else {
            debug!(chart = %chart.name, "provider returned no config");
            return Ok(Vec::new());
        };

        if !config.enabled {
            debug!(chart = %chart.name, "chart disabled");
            return Ok(Vec::new());
        }

        let values = config.values.unwrap_or_default();
        values.validate()?;

        let namespace = template
            .namespace
            .clone()
            .unwrap_or_else(|| ctx.namespace().to_string());

        Ok(vec![ChartRelease {
            chart: chart.clone(),
            namespace,
            values,
        }])
    }
}

/// Ordered composition of `HelmFunc`s.
///
/// Functions run in order against the same context. The first error is
/// returned immediately and later functions are not invoked.
#[derive(Default)]
pub struct CompositeHelmFunc {
    funcs: Vec<BoxedHelmFunc>,
}

impl CompositeHelmFunc {
    pub fn new(funcs: Vec<BoxedHelmFunc>) -> Self {
        Self { funcs }
    }

    /// Append a function; it runs after every function already held.
    pub fn push(mut self, func: impl HelmFunc + 'static) -> Self {
        self.funcs.push(Box::new(func));
        self
    }
}

impl HelmFunc for CompositeHelmFunc {
    fn render(&self, ctx: &RenderContext) -> Result<Vec<ChartRelease>> {
        let mut releases = Vec::new();
        for func in &self.funcs {
            releases.extend(func.render(ctx)?);
        }
        Ok(releases)
    }
}

impl std::fmt::Debug for CompositeHelmFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeHelmFunc")
            .field("funcs", &self.funcs.len())
            .finish()
    }
}
