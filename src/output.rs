//! Persisting the result document.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::models::ResultDocument;

/// Serialize `document` and overwrite `path`, then log a short summary.
///
/// The JSON is human-indented (2 spaces) with non-ASCII characters
/// preserved literally. The document is written to a temp file in the
/// target directory and renamed into place, so a crash mid-write never
/// leaves a truncated file behind.
pub fn persist(document: &ResultDocument, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(document)?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    tmp.write_all(json.as_bytes())?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        "Saved {} publications to {}",
        document.publications.len(),
        path.display()
    );
    info!("Total citations: {}", document.total_citations);
    info!("h-index: {}", document.h_index);
    info!("Last updated: {}", document.last_updated);
    Ok(())
}
