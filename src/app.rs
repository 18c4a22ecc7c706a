//! Run orchestration for the verse-of-the-day CLI
//!
//! Wires the configured cache, the passage client and the formatter into one
//! sequential run: resolve today's raw bytes, decode, render.

use thiserror::Error;

use crate::cache::{DateKey, DayCache};
use crate::cli::RunConfig;
use crate::data::{VotdClient, VotdError};
use crate::format::render_passage;

/// Printed instead of the verse when any step of the run fails
pub const FAILURE_NOTICE: &str = "🚧 Could not load verse 🚧";

/// Errors that can occur during a run
///
/// Every variant is handled the same way by the caller: print the failure
/// notice and exit successfully.
#[derive(Debug, Error)]
pub enum AppError {
    /// The cache location next to the executable could not be determined
    #[error("could not locate the cache directory: {0}")]
    CacheLocation(#[from] std::io::Error),

    /// Resolving or decoding the passage failed
    #[error(transparent)]
    Votd(#[from] VotdError),
}

/// Resolves and renders today's passage
///
/// The day key is computed here, once, and passed down explicitly. With
/// caching disabled the client is built without a cache and every run
/// fetches from the network.
pub async fn run(config: &RunConfig) -> Result<String, AppError> {
    let cache = if config.use_cache {
        Some(DayCache::beside_executable()?)
    } else {
        None
    };

    let client = VotdClient::new(cache)?;
    let passage = client.fetch_passage(&DateKey::today()).await?;

    Ok(render_passage(&passage))
}
