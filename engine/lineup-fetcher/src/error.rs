//! Error types for the lineup fetcher

use thiserror::Error;

/// Errors raised while fetching lineup data from the backend.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },
}
