//! Paginated repository listing
//!
//! Pages are requested one after another, starting at page 1, until a page
//! comes back empty. The first failing page aborts the whole listing.

use crate::domain::Repository;
use crate::error::FetchError;

pub mod github;

pub use github::GithubClient;

/// Anything that can serve one page of a repository listing.
pub trait PageSource {
    /// Fetch the 1-indexed `page`. An empty vector marks the end.
    fn fetch_page(&mut self, page: u32) -> Result<Vec<Repository>, FetchError>;
}

/// Collect every repository from `source`, in page order.
pub fn fetch_all<S>(source: &mut S) -> Result<Vec<Repository>, FetchError>
where
    S: PageSource + ?Sized,
{
    fetch_all_with(source, |_, _| {})
}

/// Like [`fetch_all`], calling `on_page(page, records)` after each non-empty page.
pub fn fetch_all_with<S, F>(source: &mut S, mut on_page: F) -> Result<Vec<Repository>, FetchError>
where
    S: PageSource + ?Sized,
    F: FnMut(u32, usize),
{
    let mut repos = Vec::new();
    let mut page = 1u32;

    loop {
        let batch = source.fetch_page(page)?;
        tracing::debug!(page, records = batch.len(), "fetched page");
        if batch.is_empty() {
            break;
        }
        on_page(page, batch.len());
        repos.extend(batch);
        page += 1;
    }

    tracing::info!(total = repos.len(), requests = page, "repository listing complete");
    Ok(repos)
}
