//! Publication models: the raw/enriched record from the source and the
//! normalized output record.

use serde::{Deserialize, Serialize};

/// Bibliographic block of a publication.
///
/// All fields are optional: a raw reference from the profile page may
/// carry only a title and a venue line, while an expanded record fills in
/// the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bib {
    /// Paper title
    pub title: Option<String>,

    /// Author list as a single display string
    pub author: Option<String>,

    /// Publication year, kept as a string as the source reports it
    pub pub_year: Option<String>,

    /// Venue line (used for both journals and conferences on profile rows)
    pub venue: Option<String>,

    /// Journal name, when the expanded record distinguishes it
    pub journal: Option<String>,

    /// Conference name, when the expanded record distinguishes it
    pub conference: Option<String>,
}

/// A publication reference from the external source.
///
/// The same shape covers both the partial reference returned with the
/// author profile and the fully expanded record; expansion only populates
/// more fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    /// Bibliographic block
    #[serde(default)]
    pub bib: Bib,

    /// Citation count
    pub num_citations: Option<u32>,

    /// Publication page URL
    pub pub_url: Option<String>,

    /// Source-internal identifier (`<scholar_id>:<position>`), used to
    /// build the citation-view URL
    pub author_pub_id: Option<String>,
}

/// Normalized output record.
///
/// Every key is always present in the persisted document; missing input
/// fields are substituted with defaults, never omitted. Serde field order
/// matches the persisted key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicationRecord {
    pub title: String,
    pub authors: String,
    pub year: String,
    pub venue: String,
    pub citations: u32,
    pub url: String,
    pub scholar_url: String,
}
