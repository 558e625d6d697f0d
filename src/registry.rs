//! Component registry and render plans.
//!
//! The registry is the installer's explicit list of components, built once at
//! setup and rendered once per pass. Registration order is render order.
//!
//! # Render rules
//!
//! 1. Components whose scope the installation kind excludes are skipped
//! 2. Components listed in `disabled_components` are skipped
//! 3. The first failing component aborts the pass; later ones never run

use crate::components::agent_smith;
use crate::config::{ComponentScope, InstallationKind};
use crate::context::RenderContext;
use crate::error::{ChartwireError, Result};
use crate::helm::{BoxedHelmFunc, ChartRelease, HelmFunc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A component held by the registry.
pub struct RegisteredComponent {
    pub scope: ComponentScope,
    helm: BoxedHelmFunc,
}

/// Ordered mapping from component name to its chart-import function.
#[derive(Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, RegisteredComponent>,
}

/// Releases contributed by one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentPlan {
    pub name: String,
    pub releases: Vec<ChartRelease>,
}

/// The outcome of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub namespace: String,
    pub kind: InstallationKind,
    pub components: Vec<ComponentPlan>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in component.
    ///
    /// # Errors
    ///
    /// * `ChartwireError::UserError` - two built-ins share a name
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        registry.register(
            agent_smith::COMPONENT,
            ComponentScope::Workspace,
            agent_smith::helm(),
        )?;
        Ok(registry)
    }

    /// Register a component after all existing ones.
    ///
    /// # Errors
    ///
    /// * `ChartwireError::UserError` - empty or already registered name
    pub fn register(
        &mut self,
        name: &str,
        scope: ComponentScope,
        helm: impl HelmFunc + 'static,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ChartwireError::UserError(
                "component name must not be empty".to_string(),
            ));
        }
        if self.components.contains_key(name) {
            return Err(ChartwireError::UserError(format!(
                "component '{}' is already registered",
                name
            )));
        }

        self.components.insert(
            name.to_string(),
            RegisteredComponent {
                scope,
                helm: Box::new(helm),
            },
        );
        Ok(())
    }

    /// Component names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Components in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &RegisteredComponent)> {
        self.components.iter().map(|(name, c)| (name.as_str(), c))
    }

    /// Whether `name` takes part in a render pass over `ctx`.
    pub fn is_active(&self, name: &str, ctx: &RenderContext) -> bool {
        self.components.get(name).is_some_and(|component| {
            ctx.kind().includes(component.scope) && !ctx.config().is_component_disabled(name)
        })
    }

    /// Render every active component, in registration order.
    pub fn render(&self, ctx: &RenderContext) -> Result<RenderPlan> {
        let mut components = Vec::new();

        for (name, component) in &self.components {
            if !ctx.kind().includes(component.scope) {
                debug!(component = %name, scope = %component.scope, kind = %ctx.kind(), "component not in installation kind");
                continue;
            }
            if ctx.config().is_component_disabled(name) {
                info!(component = %name, "component disabled by config");
                continue;
            }

            components.push(render_one(name, component, ctx)?);
        }

        info!(components = components.len(), namespace = ctx.namespace(), "render pass complete");
        Ok(RenderPlan {
            namespace: ctx.namespace().to_string(),
            kind: ctx.kind(),
            components,
        })
    }

    /// Render a single component regardless of kind or disabled list.
    ///
    /// # Errors
    ///
    /// * `ChartwireError::UserError` - no component named `name`
    /// * `ChartwireError::RenderFailed` - the component failed
    pub fn render_component(&self, name: &str, ctx: &RenderContext) -> Result<ComponentPlan> {
        let component = self.components.get(name).ok_or_else(|| {
            ChartwireError::UserError(format!(
                "unknown component '{}'.\nAvailable components: {}",
                name,
                self.available()
            ))
        })?;

        render_one(name, component, ctx)
    }

    fn available(&self) -> String {
        if self.components.is_empty() {
            "(none)".to_string()
        } else {
            self.names().collect::<Vec<_>>().join(", ")
        }
    }
}

fn render_one(
    name: &str,
    component: &RegisteredComponent,
    ctx: &RenderContext,
) -> Result<ComponentPlan> {
    debug!(component = %name, "rendering component");

    let releases = component
        .helm
        .render(ctx)
        .map_err(|e| ChartwireError::RenderFailed {
            component: name.to_string(),
            source: Box::new(e),
        })?;

    debug!(component = %name, releases = releases.len(), "component rendered");
    Ok(ComponentPlan {
        name: name.to_string(),
        releases,
    })
}

impl RenderPlan {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            ChartwireError::UserError(format!("failed to serialize render plan to YAML: {}", e))
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartwireError::UserError(format!("failed to serialize render plan to JSON: {}", e))
        })
    }
}
