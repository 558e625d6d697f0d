//! Helm chart registration primitives.
//!
//! - **Values**: override sets handed to the chart engine
//! - **Chart**: external chart references and template settings
//! - **Func**: configuration providers, chart import and composition

mod chart;
mod func;
mod values;

#[cfg(test)]
mod tests;

// Re-export public API
pub use chart::{Chart, ChartRelease, TemplateConfig};
pub use func::{BoxedHelmFunc, CompositeHelmFunc, HelmConfig, HelmFunc, import_template};
pub use values::ValueOptions;
