//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod serve;

use std::path::PathBuf;

use boltshop_commerce::search::{SortMode, DEFAULT_PAGE_SIZE};
use boltshop_commerce::Locale;
use clap::{Args, Subcommand};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config and PORT).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the JSON store.
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Directory of product images to index and serve.
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Directory of product images.
    pub assets_dir: PathBuf,

    /// Category key, or "all".
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Search text.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Sort order: default, price_asc, price_desc, name_asc.
    #[arg(long, default_value = "default")]
    pub sort: SortMode,

    /// Page to show (1-indexed).
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Products per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Display language: en or vi.
    #[arg(short, long, default_value = "en")]
    pub lang: Locale,

    /// List categories instead of products.
    #[arg(long)]
    pub categories: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,

    /// Write a default boltshop.toml.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}
