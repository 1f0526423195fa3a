//! Core data structures for author profiles and publication records.

mod author;
mod publication;

pub use author::{AuthorProfile, ResultDocument};
pub use publication::{Bib, Publication, PublicationRecord};
