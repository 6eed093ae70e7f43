//! Flat-file storage - CSV persistence and decade bucketing

pub mod csv;
pub mod decade;

use serde::{Deserialize, Serialize};

/// A bibliographic record as persisted between pipeline stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// PubMed identifier.
    pub pmid: String,
    /// Article title as returned by the API.
    pub title: String,
    /// Publication date string (e.g. "2003-05-01", "1998 Nov", "2020").
    pub publication_date: String,
}

impl Article {
    pub fn new(
        pmid: impl Into<String>,
        title: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> Self {
        Self {
            pmid: pmid.into(),
            title: title.into(),
            publication_date: publication_date.into(),
        }
    }

    /// Publication decade, if the date carries a recognizable year.
    pub fn decade(&self) -> Option<i32> {
        decade::decade_for(&self.publication_date)
    }
}
