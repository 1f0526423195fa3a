//! External bibliographic source boundary.
//!
//! The pipeline consumes Google Scholar through the [`ScholarSource`]
//! trait, keeping all network and parsing detail behind a substitutable
//! boundary. [`GoogleScholarSource`] is the real implementation;
//! [`MockSource`] returns scripted responses for deterministic tests.

mod google_scholar;
pub mod mock;

pub use google_scholar::GoogleScholarSource;
pub use mock::MockSource;

use async_trait::async_trait;

use crate::models::{AuthorProfile, Publication};

/// Capability interface over the external bibliographic source.
#[async_trait]
pub trait ScholarSource: Send + Sync + std::fmt::Debug {
    /// Look up an author by id, with the publications section expanded.
    ///
    /// One network-equivalent call. Failure here is fatal for the run:
    /// without a profile there is nothing downstream to do.
    async fn resolve_author(&self, id: &str) -> Result<AuthorProfile, SourceError>;

    /// Expand a single publication reference with full detail (author
    /// list, venue, URL, citation count).
    ///
    /// Callers treat failure as non-fatal and keep the unenriched
    /// reference for that item.
    async fn expand_publication(
        &self,
        publication: &Publication,
    ) -> Result<Publication, SourceError>;
}

/// Errors that can occur when interacting with a source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (HTML structure not as expected)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error response from the source
    #[error("API error: {0}")]
    Api(String),

    /// Author or publication not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("Error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}
