pub use clap::Parser;

use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Browse the book catalog and check shelf navigation")]
pub struct Args {
    /// Base URL of the book catalog (defaults to config, then Google Books)
    #[arg(long, global = true)]
    pub catalog_url: Option<Url>,

    /// Path to the shelf config directory (defaults to ~/.shelf)
    #[arg(long, global = true)]
    pub config_path: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: crate::Command,
}
