//! Typed errors for the fetch and file-system stages

use std::path::PathBuf;
use thiserror::Error;

/// Failure while paging through the repository listing.
///
/// Any variant aborts the whole run; remaining pages are never requested.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success status code.
    #[error("GitHub API returned status {status} for page {page}")]
    Status { page: u32, status: u16 },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("request for page {page} failed")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a JSON array of repositories.
    #[error("could not decode repositories on page {page}")]
    Decode {
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure reading the exclusion list or writing the output document.
#[derive(Debug, Error)]
pub enum FileSystemError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
