//! Integration tests for the fetch-normalize-sort-persist pipeline,
//! driven end to end through the mock source.

use scholar_fetch::config::Config;
use scholar_fetch::models::{AuthorProfile, Bib, Publication};
use scholar_fetch::pipeline;
use scholar_fetch::sources::mock::{make_publication, MockSource};

fn test_config(dir: &tempfile::TempDir) -> Config {
    let mut config = Config::without_delay("Pdd1FaEAAAAJ");
    config.output_path = dir.path().join("publications.json");
    config
}

fn profile_with(publications: Vec<Publication>) -> AuthorProfile {
    AuthorProfile {
        scholar_id: "Pdd1FaEAAAAJ".to_string(),
        name: Some("Jane Doe".to_string()),
        citedby: Some(42),
        hindex: Some(5),
        i10index: Some(3),
        publications,
    }
}

fn expansion(id: &str, title: &str, year: &str, citations: u32) -> Publication {
    Publication {
        bib: Bib {
            title: Some(title.to_string()),
            author: Some("J Doe".to_string()),
            pub_year: Some(year.to_string()),
            journal: Some("Journal of Tests".to_string()),
            ..Bib::default()
        },
        num_citations: Some(citations),
        pub_url: Some(format!("https://example.com/{}", id)),
        author_pub_id: Some(id.to_string()),
    }
}

#[tokio::test]
async fn test_end_to_end_citation_tiebreak() {
    let source = MockSource::new();
    source.set_profile(profile_with(vec![
        make_publication("Pdd1FaEAAAAJ:first", "First"),
        make_publication("Pdd1FaEAAAAJ:second", "Second"),
    ]));
    source.set_expansion(
        "Pdd1FaEAAAAJ:first",
        expansion("Pdd1FaEAAAAJ:first", "First", "2023", 10),
    );
    source.set_expansion(
        "Pdd1FaEAAAAJ:second",
        expansion("Pdd1FaEAAAAJ:second", "Second", "2023", 20),
    );

    let dir = tempfile::tempdir().unwrap();
    let document = pipeline::run(&source, &test_config(&dir)).await.unwrap();

    assert_eq!(document.author, "Jane Doe");
    assert_eq!(document.total_citations, 42);
    assert_eq!(document.h_index, 5);
    assert_eq!(document.i10_index, 3);

    // Equal years: higher citation count first.
    assert_eq!(document.publications.len(), 2);
    assert_eq!(document.publications[0].title, "Second");
    assert_eq!(document.publications[0].citations, 20);
    assert_eq!(document.publications[1].title, "First");

    // The document landed on disk.
    let written = std::fs::read_to_string(dir.path().join("publications.json")).unwrap();
    let on_disk: scholar_fetch::models::ResultDocument =
        serde_json::from_str(&written).unwrap();
    assert_eq!(on_disk, document);
}

#[tokio::test]
async fn test_partial_failure_keeps_unenriched_item() {
    let source = MockSource::new();
    let mut raw_second = make_publication("Pdd1FaEAAAAJ:second", "Second (raw)");
    raw_second.bib.pub_year = Some("2021".to_string());
    source.set_profile(profile_with(vec![
        make_publication("Pdd1FaEAAAAJ:first", "First"),
        raw_second,
    ]));
    source.set_expansion(
        "Pdd1FaEAAAAJ:first",
        expansion("Pdd1FaEAAAAJ:first", "First", "2023", 10),
    );
    source.fail_expansion("Pdd1FaEAAAAJ:second");

    let dir = tempfile::tempdir().unwrap();
    let document = pipeline::run(&source, &test_config(&dir)).await.unwrap();

    // No item dropped: the failed one falls back to its raw reference.
    assert_eq!(document.publications.len(), 2);
    let fallback = document
        .publications
        .iter()
        .find(|p| p.title == "Second (raw)")
        .expect("fallback record present");
    assert_eq!(fallback.year, "2021");
    assert_eq!(fallback.authors, "");
    assert_eq!(fallback.venue, "");
    assert_eq!(fallback.citations, 0);
    assert_eq!(fallback.url, "");
    assert_eq!(
        fallback.scholar_url,
        "https://scholar.google.com/citations?view_op=view_citation&hl=en&user=Pdd1FaEAAAAJ&citation_for_view=Pdd1FaEAAAAJ:second"
    );
}

#[tokio::test]
async fn test_output_length_matches_resolver_output() {
    let source = MockSource::new();
    let raws: Vec<Publication> = (0..5)
        .map(|i| make_publication(&format!("Pdd1FaEAAAAJ:{}", i), &format!("Paper {}", i)))
        .collect();
    source.set_profile(profile_with(raws));
    // Fail every other expansion.
    source.fail_expansion("Pdd1FaEAAAAJ:1");
    source.fail_expansion("Pdd1FaEAAAAJ:3");

    let dir = tempfile::tempdir().unwrap();
    let document = pipeline::run(&source, &test_config(&dir)).await.unwrap();

    assert_eq!(document.publications.len(), 5);
}

#[tokio::test]
async fn test_author_resolution_failure_aborts_run() {
    let source = MockSource::new();
    // No scripted profile: resolution fails, nothing is written.

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let result = pipeline::run(&source, &config).await;

    assert!(result.is_err());
    assert!(!config.output_path.exists());
}

#[tokio::test]
async fn test_missing_author_fields_use_fallbacks() {
    let source = MockSource::new();
    source.set_profile(AuthorProfile {
        scholar_id: "Pdd1FaEAAAAJ".to_string(),
        publications: vec![Publication::default()],
        ..AuthorProfile::default()
    });

    let dir = tempfile::tempdir().unwrap();
    let document = pipeline::run(&source, &test_config(&dir)).await.unwrap();

    assert_eq!(document.author, "Harsha Gwalani");
    assert_eq!(document.total_citations, 0);
    assert_eq!(document.h_index, 0);
    assert_eq!(document.i10_index, 0);
    assert_eq!(document.publications[0].title, "Untitled");
}

#[tokio::test]
async fn test_repeat_runs_differ_only_in_timestamp() {
    let source = MockSource::new();
    source.set_profile(profile_with(vec![make_publication(
        "Pdd1FaEAAAAJ:only",
        "Only paper",
    )]));

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let mut first = pipeline::run(&source, &config).await.unwrap();
    let mut second = pipeline::run(&source, &config).await.unwrap();

    first.last_updated = String::new();
    second.last_updated = String::new();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_timestamp_format() {
    let source = MockSource::new();
    source.set_profile(profile_with(Vec::new()));

    let dir = tempfile::tempdir().unwrap();
    let document = pipeline::run(&source, &test_config(&dir)).await.unwrap();

    // `YYYY-MM-DD HH:MM UTC`
    assert_eq!(document.last_updated.len(), 20);
    assert!(document.last_updated.ends_with(" UTC"));
    assert_eq!(&document.last_updated[4..5], "-");
    assert_eq!(&document.last_updated[10..11], " ");
    assert_eq!(&document.last_updated[13..14], ":");
}
