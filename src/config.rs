//! Run configuration.
//!
//! The run is fully parameterized here; no CLI flags are accepted. The
//! pipeline receives a `Config` at construction time rather than reading
//! ambient globals, so tests can substitute their own values (in
//! particular a zero `request_delay`).

use std::path::PathBuf;
use std::time::Duration;

/// Default Google Scholar author identifier.
pub const DEFAULT_SCHOLAR_ID: &str = "Pdd1FaEAAAAJ";

/// Default output document path, overwritten in full on each run.
pub const DEFAULT_OUTPUT_FILE: &str = "publications.json";

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Google Scholar author identifier
    pub scholar_id: String,

    /// Path of the JSON document written on each run
    pub output_path: PathBuf,

    /// Author name used when the profile carries none
    pub fallback_author: String,

    /// Pause after each successful per-publication fetch, to limit the
    /// request rate against Google Scholar
    pub request_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scholar_id: DEFAULT_SCHOLAR_ID.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fallback_author: "Harsha Gwalani".to_string(),
            request_delay: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// Configuration with the given scholar id and no pacing delay.
    /// Intended for tests and fake sources.
    pub fn without_delay(scholar_id: impl Into<String>) -> Self {
        Self {
            scholar_id: scholar_id.into(),
            request_delay: Duration::ZERO,
            ..Default::default()
        }
    }
}
