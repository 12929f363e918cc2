//! # schemata-hooks
//!
//! Template hooks that decorate dataset pages with schema buttons and modals.
//!
//! - [`HookRegistry`] maps extension point names to gated renderers
//! - [`predicates`] decide whether a page has anything to show
//! - [`ModalLinks`] computes documentation and validation links per resource
//! - [`plugins`] provides the simple and the catalog-aware hook sets
//! - [`Theme`] renders the bundled minijinja templates

pub mod context;
pub mod links;
pub mod plugins;
pub mod predicates;
pub mod registry;
pub mod theme;

mod error;

pub use context::HookContext;
pub use error::HookError;
pub use links::ModalLinks;
pub use plugins::install;
pub use registry::{EXTRA_BUTTONS, HookRegistry, HookRenderer, MODALS, Predicate};
pub use theme::{TemplateRenderer, Theme};
