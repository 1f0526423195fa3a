//! The fetch-normalize-sort pipeline.
//!
//! Control flows strictly resolver → enricher → normalizer → sorter →
//! persister, with no feedback loops. The enricher contains per-item
//! failures: a publication whose detail fetch fails is kept as its
//! unenriched reference, so the output always has one record per raw
//! reference.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{AuthorProfile, Publication, PublicationRecord, ResultDocument};
use crate::output;
use crate::sources::ScholarSource;

/// Run the full pipeline against `source` and write the result document
/// to the configured path.
///
/// Author resolution failure aborts the run; per-publication expansion
/// failures are contained and never affect the exit status.
pub async fn run(source: &dyn ScholarSource, config: &Config) -> anyhow::Result<ResultDocument> {
    info!("Fetching author profile for Scholar ID: {}", config.scholar_id);
    let profile = source
        .resolve_author(&config.scholar_id)
        .await
        .map_err(|e| anyhow::anyhow!("Error fetching author profile: {}", e))?;

    let enriched = enrich_publications(source, &profile.publications, config).await;

    let mut records: Vec<PublicationRecord> = enriched
        .iter()
        .map(|publication| normalize(publication, &config.scholar_id))
        .collect();
    sort_records(&mut records);

    let document = assemble_document(&profile, records, Utc::now(), &config.fallback_author);
    output::persist(&document, &config.output_path)?;
    Ok(document)
}

/// Expand each raw reference in order, falling back to the unenriched
/// reference when expansion fails. Output length always equals input
/// length.
pub async fn enrich_publications(
    source: &dyn ScholarSource,
    publications: &[Publication],
    config: &Config,
) -> Vec<Publication> {
    let mut enriched = Vec::with_capacity(publications.len());

    for (i, publication) in publications.iter().enumerate() {
        info!("Fetching details for publication {}...", i + 1);

        match source.expand_publication(publication).await {
            Ok(filled) => {
                enriched.push(filled);
                // Pause only after a successful fetch; a failed one falls
                // through immediately.
                if !config.request_delay.is_zero() {
                    tokio::time::sleep(config.request_delay).await;
                }
            }
            Err(e) => {
                warn!("Could not fetch details for publication {}: {}", i + 1, e);
                enriched.push(publication.clone());
            }
        }
    }

    enriched
}

/// Map an enriched-or-fallback record into the output schema.
///
/// Missing fields never error; every field has a default. The venue falls
/// back through venue → journal → conference → empty.
pub fn normalize(publication: &Publication, scholar_id: &str) -> PublicationRecord {
    let bib = &publication.bib;
    let venue = bib
        .venue
        .clone()
        .or_else(|| bib.journal.clone())
        .or_else(|| bib.conference.clone())
        .unwrap_or_default();

    PublicationRecord {
        title: bib.title.clone().unwrap_or_else(|| "Untitled".to_string()),
        authors: bib.author.clone().unwrap_or_default(),
        year: bib.pub_year.clone().unwrap_or_default(),
        venue,
        citations: publication.num_citations.unwrap_or(0),
        url: publication.pub_url.clone().unwrap_or_default(),
        scholar_url: scholar_url(
            scholar_id,
            publication.author_pub_id.as_deref().unwrap_or(""),
        ),
    }
}

/// Citation-view URL for a publication on the author's profile. Always
/// synthesized from the author id and the internal identifier, never taken
/// from the source's own URL field.
pub fn scholar_url(scholar_id: &str, author_pub_id: &str) -> String {
    format!(
        "https://scholar.google.com/citations?view_op=view_citation&hl=en&user={}&citation_for_view={}",
        scholar_id, author_pub_id
    )
}

/// Stable total order: year descending (blank or unparseable years sort
/// as 0), citation count descending as the tie-break.
pub fn sort_records(records: &mut [PublicationRecord]) {
    records.sort_by_key(|r| {
        (
            Reverse(r.year.parse::<i64>().unwrap_or(0)),
            Reverse(r.citations),
        )
    });
}

/// Assemble the persisted document from the profile and the sorted
/// records, stamping `last_updated` from `now`.
pub fn assemble_document(
    profile: &AuthorProfile,
    publications: Vec<PublicationRecord>,
    now: DateTime<Utc>,
    fallback_author: &str,
) -> ResultDocument {
    ResultDocument {
        last_updated: now.format("%Y-%m-%d %H:%M UTC").to_string(),
        author: profile
            .name
            .clone()
            .unwrap_or_else(|| fallback_author.to_string()),
        total_citations: profile.citedby.unwrap_or(0),
        h_index: profile.hindex.unwrap_or(0),
        i10_index: profile.i10index.unwrap_or(0),
        publications,
    }
}
