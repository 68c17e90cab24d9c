// Star List Provider.
// Resolves the full list of a user's starred repositories, preferring a
// fresh local cache over a paginated re-fetch.

use std::future::Future;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cache::{self, FRESHNESS_WINDOW};
use crate::config::Config;
use crate::error::{RandomStarError, Result};
use crate::github::{GitHubClient, Repository};

/// Repositories requested per page.
pub const PAGE_SIZE: u32 = 100;

/// Produce the complete, non-empty star list for the configured user.
///
/// A fresh cache entry short-circuits the network entirely. On a cache miss
/// (absent, stale, or unreadable) the list is rebuilt from the API and the
/// cache rewritten; a failed cache write is logged and otherwise ignored.
pub async fn resolve_star_list(config: &Config) -> Result<Vec<Repository>> {
    resolve_with_cache(config, cache::star_data_path().as_deref()).await
}

/// Resolution against an explicit cache path (None when no cache directory
/// could be determined).
async fn resolve_with_cache(config: &Config, cache_path: Option<&Path>) -> Result<Vec<Repository>> {
    if let Some(stars) = cache_path.and_then(load_cached) {
        info!(count = stars.len(), "using cached star list");
        return Ok(stars);
    }

    let client = GitHubClient::new(config.token.as_deref())?;
    let stars = fetch_all_starred(&client, &config.user, PAGE_SIZE).await?;

    if stars.is_empty() {
        return Err(RandomStarError::NoStars(config.user.clone()));
    }
    info!(count = stars.len(), user = %config.user, "fetched star list");

    match cache_path {
        Some(path) => {
            if let Err(err) = cache::write_record(path, &stars) {
                warn!("failed to write star cache: {err}");
            }
        }
        None => warn!("no cache directory available, skipping cache write"),
    }

    Ok(stars)
}

/// Read the cached star list if present, fresh, and non-empty. Read and
/// parse failures are logged and count as a miss; an empty cached list also
/// counts as a miss so callers always see a non-empty result.
fn load_cached(path: &Path) -> Option<Vec<Repository>> {
    match cache::read_fresh(path, FRESHNESS_WINDOW) {
        Ok(Some(stars)) if !stars.is_empty() => Some(stars),
        Ok(Some(_)) => {
            warn!("cached star list is empty, fetching fresh data");
            None
        }
        Ok(None) => None,
        Err(err) => {
            warn!("failed to read star cache, fetching fresh data: {err}");
            None
        }
    }
}

/// Fetch every page of the user's starred repositories.
async fn fetch_all_starred(
    client: &GitHubClient,
    user: &str,
    per_page: u32,
) -> Result<Vec<Repository>> {
    accumulate_pages(per_page, |page| client.get_starred_page(user, page, per_page)).await
}

/// Accumulate numbered pages into one list. Stops on an empty page or a page
/// shorter than `per_page`; any page error aborts the whole fetch.
async fn accumulate_pages<F, Fut>(per_page: u32, mut fetch_page: F) -> Result<Vec<Repository>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<Repository>>>,
{
    let mut stars = Vec::new();
    let mut page = 1;

    loop {
        let batch = fetch_page(page).await?;
        debug!(page, count = batch.len(), "fetched starred page");
        if batch.is_empty() {
            break;
        }

        let last_page = (batch.len() as u32) < per_page;
        stars.extend(batch);
        if last_page {
            break;
        }
        page += 1;
    }

    Ok(stars)
}
