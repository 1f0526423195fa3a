//! Author profile and the persisted result document.

use serde::{Deserialize, Serialize};

use super::{Publication, PublicationRecord};

/// An author's top-level profile with its raw publication references.
///
/// Produced once per run by the resolver and only read afterwards. The
/// bibliometric fields are optional; the persister substitutes zeros.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorProfile {
    /// Opaque identifier used by the source to locate the profile
    pub scholar_id: String,

    /// Display name
    pub name: Option<String>,

    /// Total citation count across all publications
    pub citedby: Option<u32>,

    /// h-index
    pub hindex: Option<u32>,

    /// i10-index
    pub i10index: Option<u32>,

    /// Raw publication references, in the order the source returned them
    #[serde(default)]
    pub publications: Vec<Publication>,
}

/// The document written to `publications.json`.
///
/// Serde field order matches the persisted key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultDocument {
    /// UTC timestamp of the run, `YYYY-MM-DD HH:MM UTC`
    pub last_updated: String,
    pub author: String,
    pub total_citations: u32,
    pub h_index: u32,
    pub i10_index: u32,
    /// Sorted by year descending, then citations descending
    pub publications: Vec<PublicationRecord>,
}
