//! HTML rendering through minijinja.

use std::path::Path;

use minijinja::{Environment, Value};
use schemata_config::ThemeConfig;

use crate::error::HookError;

pub const BUTTON_TEMPLATE: &str = "button.html";
pub const MODAL_TEMPLATE: &str = "modal.html";

const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    (BUTTON_TEMPLATE, include_str!("../templates/button.html")),
    (MODAL_TEMPLATE, include_str!("../templates/modal.html")),
];

/// Renders a named template with a context. This is the seam a host with its
/// own templating engine implements.
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, name: &str, ctx: Value) -> Result<String, HookError>;
}

/// Built-in templates, optionally overridden from a directory.
///
/// `.html` templates are auto-escaped.
#[derive(Debug)]
pub struct Theme {
    env: Environment<'static>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// # Panics
    ///
    /// Panics if a bundled template fails to parse, which the crate's own
    /// tests rule out. Use [`Self::try_new`] to get the error instead.
    #[must_use]
    pub fn new() -> Self {
        Self::try_new().expect("bundled template should parse")
    }

    /// Theme with the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Template`] if a bundled template does not parse.
    pub fn try_new() -> Result<Self, HookError> {
        let mut env = Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Theme honouring the configured override directory, if any.
    ///
    /// # Errors
    ///
    /// See [`Self::with_template_dir`].
    pub fn from_config(config: &ThemeConfig) -> Result<Self, HookError> {
        match &config.template_dir {
            Some(dir) => Self::with_template_dir(dir),
            None => Self::try_new(),
        }
    }

    /// Built-in templates, replaced by same-named files found in `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Io`] if an override cannot be read and
    /// [`HookError::Template`] if it does not parse.
    pub fn with_template_dir(dir: &Path) -> Result<Self, HookError> {
        let mut theme = Self::try_new()?;
        for (name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!(template = name, path = %path.display(), "template override");
                theme.add_template(name, std::fs::read_to_string(&path)?)?;
            }
        }
        Ok(theme)
    }

    /// Add or replace a template.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Template`] on a syntax error.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<(), HookError> {
        self.env.add_template_owned(name.into(), source.into())?;
        Ok(())
    }
}

impl TemplateRenderer for Theme {
    fn render(&self, name: &str, ctx: Value) -> Result<String, HookError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}
