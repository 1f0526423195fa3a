//! Mock source for testing purposes.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{AuthorProfile, Bib, Publication};
use crate::sources::{ScholarSource, SourceError};

/// A mock source for testing that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockSource {
    profile: Mutex<Option<AuthorProfile>>,
    expansions: Mutex<HashMap<String, Publication>>,
    failures: Mutex<HashSet<String>>,
}

impl MockSource {
    /// Create a new mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile returned by `resolve_author`.
    pub fn set_profile(&self, profile: AuthorProfile) {
        *self.profile.lock().unwrap() = Some(profile);
    }

    /// Script the expansion for the publication with this internal id.
    pub fn set_expansion(&self, author_pub_id: &str, publication: Publication) {
        self.expansions
            .lock()
            .unwrap()
            .insert(author_pub_id.to_string(), publication);
    }

    /// Make expansion fail for the publication with this internal id.
    pub fn fail_expansion(&self, author_pub_id: &str) {
        self.failures
            .lock()
            .unwrap()
            .insert(author_pub_id.to_string());
    }
}

#[async_trait]
impl ScholarSource for MockSource {
    async fn resolve_author(&self, id: &str) -> Result<AuthorProfile, SourceError> {
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| SourceError::NotFound(format!("no scripted profile for {}", id)))
    }

    async fn expand_publication(
        &self,
        publication: &Publication,
    ) -> Result<Publication, SourceError> {
        let key = publication.author_pub_id.clone().unwrap_or_default();
        if self.failures.lock().unwrap().contains(&key) {
            return Err(SourceError::Api(format!("scripted failure for {}", key)));
        }
        match self.expansions.lock().unwrap().get(&key) {
            Some(filled) => Ok(filled.clone()),
            // Unscripted publications expand to themselves.
            None => Ok(publication.clone()),
        }
    }
}

/// Helper to create a raw publication reference for testing.
pub fn make_publication(author_pub_id: &str, title: &str) -> Publication {
    Publication {
        bib: Bib {
            title: Some(title.to_string()),
            ..Bib::default()
        },
        author_pub_id: Some(author_pub_id.to_string()),
        ..Publication::default()
    }
}
