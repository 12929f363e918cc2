//! Extension points and the hooks registered on them.
//!
//! The host calls [`HookRegistry::render`] when it reaches an extension point
//! in a page. Every hook registered on that point whose predicate accepts the
//! context contributes one HTML fragment, in registration order.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::context::HookContext;
use crate::error::HookError;
use crate::theme::TemplateRenderer;

/// Extra buttons on each resource card of a dataset page.
pub const EXTRA_BUTTONS: &str = "dataset.resource.card.extra-buttons";

/// Modal dialogs appended to the page body.
pub const MODALS: &str = "base.modals";

/// Decides whether a hook applies to the current page.
pub type Predicate = fn(&HookContext) -> bool;

/// Produces an HTML fragment for an extension point.
pub trait HookRenderer: Send + Sync {
    fn render<'a>(
        &'a self,
        ctx: &'a HookContext,
        templates: &'a dyn TemplateRenderer,
    ) -> BoxFuture<'a, Result<String, HookError>>;
}

pub struct RegisteredHook {
    pub name: String,
    pub predicate: Option<Predicate>,
    renderer: Arc<dyn HookRenderer>,
}

impl RegisteredHook {
    #[must_use]
    pub fn applies(&self, ctx: &HookContext) -> bool {
        self.predicate.is_none_or(|predicate| predicate(ctx))
    }
}

impl std::fmt::Debug for RegisteredHook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredHook")
            .field("name", &self.name)
            .field("gated", &self.predicate.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct HookRegistry {
    points: BTreeMap<String, Vec<RegisteredHook>>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        point: &str,
        name: impl Into<String>,
        predicate: Option<Predicate>,
        renderer: Arc<dyn HookRenderer>,
    ) {
        let name = name.into();
        tracing::debug!(point, hook = %name, "registering template hook");
        self.points
            .entry(point.to_string())
            .or_default()
            .push(RegisteredHook {
                name,
                predicate,
                renderer,
            });
    }

    /// Extension points with at least one hook.
    pub fn points(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    #[must_use]
    pub fn hooks(&self, point: &str) -> &[RegisteredHook] {
        self.points.get(point).map(Vec::as_slice).unwrap_or_default()
    }

    /// Render every applicable hook on `point`.
    ///
    /// # Errors
    ///
    /// Returns the first [`HookError`] raised by a renderer; fragments already
    /// produced for this point are discarded.
    pub async fn render(
        &self,
        point: &str,
        ctx: &HookContext,
        templates: &dyn TemplateRenderer,
    ) -> Result<Vec<String>, HookError> {
        let mut fragments = Vec::new();
        for hook in self.hooks(point) {
            if !hook.applies(ctx) {
                tracing::trace!(point, hook = %hook.name, "hook skipped by predicate");
                continue;
            }
            let fragment = hook.renderer.render(ctx, templates).await?;
            tracing::debug!(point, hook = %hook.name, bytes = fragment.len(), "hook rendered");
            fragments.push(fragment);
        }
        Ok(fragments)
    }
}
