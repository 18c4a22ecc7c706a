//! Verse of the Day CLI - Print today's scripture passage
//!
//! Fetches the verse of the day from the passage endpoint, caching the raw
//! response on disk so repeated same-day invocations skip the network. On
//! any failure it prints a short notice and still exits successfully, so it
//! stays safe to embed in shell prompts and status bars.

mod app;
mod cache;
mod cli;
mod data;
mod format;

use clap::Parser;

use app::FAILURE_NOTICE;
use cli::{Cli, RunConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = RunConfig::from_cli(&cli);

    // The exit code is 0 on every path; failures only change what is printed
    match app::run(&config).await {
        Ok(rendered) => print!("{}", rendered),
        Err(_) => print!("{}", FAILURE_NOTICE),
    }
}
