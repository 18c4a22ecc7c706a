//! Command-line interface parsing for the verse-of-the-day CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --no-cache flag that selects the always-fetch mode.

use clap::Parser;

/// Verse of the Day CLI - Print today's scripture passage
#[derive(Parser, Debug)]
#[command(name = "votd")]
#[command(about = "Print the verse of the day")]
#[command(version)]
pub struct Cli {
    /// Skip the on-disk day cache and always fetch from the network
    ///
    /// By default the raw response is cached next to the executable, one
    /// file per calendar day, and same-day invocations reuse it.
    #[arg(long)]
    pub no_cache: bool,
}

/// Configuration derived from CLI arguments for a single run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Whether to resolve through the on-disk day cache
    pub use_cache: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

impl RunConfig {
    /// Creates a RunConfig from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            use_cache: !cli.no_cache,
        }
    }
}
