use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Top-level CLI parser for the `schemata` binary.
#[derive(Debug, Parser)]
#[command(name = "schemata", version, about = "Schema hooks for data portal pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Raw,
}

#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Render the hooks of one extension point for a dataset page.
    Render(RenderArgs),
    /// Show per-resource documentation and validation links.
    Urls(UrlsArgs),
    /// Inspect the remote schema catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct RenderArgs {
    /// Extension point name (e.g. `base.modals`).
    #[arg(long)]
    pub point: String,
    /// Dataset JSON file as exported by the portal.
    #[arg(long)]
    pub dataset: PathBuf,
    /// Resource id to put in the context (for resource-level points).
    #[arg(long)]
    pub resource: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct UrlsArgs {
    /// Dataset JSON file as exported by the portal.
    #[arg(long)]
    pub dataset: PathBuf,
}

#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// List catalog entries.
    List,
    /// Show one catalog entry.
    Show {
        /// Schema name.
        name: String,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
}
