//! Google Scholar source implementation.
//!
//! Google Scholar has no official public API; this implementation scrapes
//! the public citations profile page and per-publication citation view
//! pages. Profile rows carry the title, the gray author/venue lines, the
//! year and the citation count; the citation view adds the full field
//! table and the publication URL.
//!
//! Scraping may violate Google's Terms of Service. Use at your own risk.

use std::time::Duration;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

use crate::models::{AuthorProfile, Bib, Publication};
use crate::sources::{ScholarSource, SourceError};

const SCHOLAR_BASE_URL: &str = "https://scholar.google.com";

/// Profile rows per request. Scholar caps pagesize at 100.
const PAGE_SIZE: usize = 100;

/// Google Scholar source
///
/// One best-effort request per lookup; callers decide whether a failure
/// is fatal (author resolution) or contained (per-publication expansion).
#[derive(Debug, Clone)]
pub struct GoogleScholarSource {
    client: reqwest::Client,
}

impl GoogleScholarSource {
    pub fn new() -> Result<Self, SourceError> {
        // Scholar serves a reduced page to unknown agents.
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    async fn get_html(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(format!("Failed to fetch {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(SourceError::Api(format!(
                "Google Scholar returned status {} for {}",
                response.status(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Parse(format!("Failed to read response body: {}", e)))
    }
}

#[async_trait]
impl ScholarSource for GoogleScholarSource {
    async fn resolve_author(&self, id: &str) -> Result<AuthorProfile, SourceError> {
        let url = format!(
            "{}/citations?hl=en&user={}&pagesize={}",
            SCHOLAR_BASE_URL,
            urlencoding::encode(id),
            PAGE_SIZE
        );
        let html = self.get_html(&url).await?;
        parse_profile(&html, id)
    }

    async fn expand_publication(
        &self,
        publication: &Publication,
    ) -> Result<Publication, SourceError> {
        let author_pub_id = publication.author_pub_id.as_deref().ok_or_else(|| {
            SourceError::NotFound("publication has no citation-view identifier".to_string())
        })?;

        // The identifier is `<user>:<position>`; the citation view wants both.
        let user = author_pub_id.split(':').next().unwrap_or_default();
        let url = format!(
            "{}/citations?view_op=view_citation&hl=en&user={}&citation_for_view={}",
            SCHOLAR_BASE_URL,
            urlencoding::encode(user),
            urlencoding::encode(author_pub_id)
        );
        let html = self.get_html(&url).await?;
        Ok(parse_citation_view(&html, publication))
    }
}

/// Parse the citations profile page into an author profile with raw
/// publication references.
fn parse_profile(html: &str, id: &str) -> Result<AuthorProfile, SourceError> {
    let document = Html::parse_document(html);

    let name = select_text(&document, "#gsc_prf_in");

    // The stats table interleaves "all" and "since" columns; the "all"
    // values sit at even indices: citations, h-index, i10-index.
    let stats: Vec<String> = Selector::parse("td.gsc_rsb_std")
        .ok()
        .map(|s| {
            document
                .select(&s)
                .map(|cell| cell.text().collect::<String>().trim().to_string())
                .collect()
        })
        .unwrap_or_default();
    let stat = |i: usize| {
        stats
            .get(i)
            .and_then(|v| v.replace(',', "").parse::<u32>().ok())
    };

    let mut publications = Vec::new();
    if let Ok(row_selector) = Selector::parse("tr.gsc_a_tr") {
        for row in document.select(&row_selector) {
            if let Some(publication) = parse_profile_row(&row) {
                publications.push(publication);
            }
        }
    }

    if name.is_none() && publications.is_empty() {
        return Err(SourceError::NotFound(format!(
            "no profile found for author {}",
            id
        )));
    }

    Ok(AuthorProfile {
        scholar_id: id.to_string(),
        name,
        citedby: stat(0),
        hindex: stat(2),
        i10index: stat(4),
        publications,
    })
}

/// Parse one publication row from the profile table.
fn parse_profile_row(row: &ElementRef) -> Option<Publication> {
    let title_selector = Selector::parse("a.gsc_a_at").ok()?;
    let title_elem = row.select(&title_selector).next()?;
    let title = title_elem.text().collect::<String>().trim().to_string();

    // The row link carries the citation-view identifier.
    let author_pub_id = title_elem
        .value()
        .attr("href")
        .and_then(|href| query_param(href, "citation_for_view"));

    let gray_selector = Selector::parse("div.gs_gray").ok()?;
    let mut gray = row.select(&gray_selector);
    let author = gray
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());
    let venue = gray
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());

    let year = Selector::parse("td.gsc_a_y span")
        .ok()
        .and_then(|s| row.select(&s).next())
        .map(|e| e.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());

    let citations = Selector::parse("a.gsc_a_ac")
        .ok()
        .and_then(|s| row.select(&s).next())
        .and_then(|e| e.text().collect::<String>().trim().parse::<u32>().ok());

    Some(Publication {
        bib: Bib {
            title: (!title.is_empty()).then_some(title),
            author,
            pub_year: year,
            venue,
            ..Bib::default()
        },
        num_citations: citations,
        pub_url: None,
        author_pub_id,
    })
}

/// Overlay the citation-view field table on top of the raw reference.
/// Fields absent from the page leave the raw values untouched.
fn parse_citation_view(html: &str, publication: &Publication) -> Publication {
    let document = Html::parse_document(html);
    let mut filled = publication.clone();

    if let Some(title) = select_text(&document, "#gsc_oci_title") {
        filled.bib.title = Some(title);
    }

    if let Some(href) = Selector::parse("a.gsc_oci_title_link")
        .ok()
        .and_then(|s| document.select(&s).next())
        .and_then(|e| e.value().attr("href").map(str::to_string))
    {
        filled.pub_url = Some(href);
    }

    let selectors = (
        Selector::parse("#gsc_oci_table div.gs_scl"),
        Selector::parse("div.gsc_oci_field"),
        Selector::parse("div.gsc_oci_value"),
    );
    let (Ok(row_sel), Ok(field_sel), Ok(value_sel)) = selectors else {
        return filled;
    };

    for row in document.select(&row_sel) {
        let field = row
            .select(&field_sel)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_lowercase());
        let value = row
            .select(&value_sel)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string());
        let (Some(field), Some(value)) = (field, value) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }

        match field.as_str() {
            "authors" => filled.bib.author = Some(value),
            // Dates come as `2023/5/14`; only the year is kept.
            "publication date" => {
                filled.bib.pub_year = value.split('/').next().map(str::to_string)
            }
            "journal" => filled.bib.journal = Some(value),
            "conference" => filled.bib.conference = Some(value),
            "source" | "book" => filled.bib.venue = Some(value),
            // Rendered as "Cited by N".
            "total citations" => {
                if let Some(count) = value
                    .split_whitespace()
                    .find_map(|w| w.replace(',', "").parse::<u32>().ok())
                {
                    filled.num_citations = Some(count);
                }
            }
            _ => {}
        }
    }

    filled
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let text = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>()
        .trim()
        .to_string();
    (!text.is_empty()).then_some(text)
}

/// Extract a query parameter from a relative or absolute href.
fn query_param(href: &str, name: &str) -> Option<String> {
    let query = href.split('?').nth(1)?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
    })
}
