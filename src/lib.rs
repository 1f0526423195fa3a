//! # scholar-fetch
//!
//! Fetches an academic author's publication record from Google Scholar and
//! persists it as `publications.json` for downstream display (e.g. a
//! personal website listing).
//!
//! ## Architecture
//!
//! A single linear pipeline: resolve the author profile, expand each
//! publication reference with full detail, normalize into a fixed output
//! schema, sort, and persist.
//!
//! - [`models`]: Core data structures (AuthorProfile, Publication, ResultDocument)
//! - [`sources`]: The external bibliographic source behind the [`ScholarSource`] trait
//! - [`pipeline`]: Enrichment loop, normalization, and sorting
//! - [`output`]: Document assembly and persistence
//! - [`config`]: Run configuration

pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod sources;

// Re-export commonly used types
pub use config::Config;
pub use models::{AuthorProfile, Publication, PublicationRecord, ResultDocument};
pub use sources::{ScholarSource, SourceError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
