use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("catalog error: {0}")]
    Catalog(#[from] schemata_catalog::CatalogError),
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("hook '{hook}' needs a {missing} in its context")]
    MissingContext {
        hook: &'static str,
        missing: &'static str,
    },
}
