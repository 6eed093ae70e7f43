//! Unified Result Model
//!
//! Every command maps its output to this model before rendering, so all
//! stages emit the same line-oriented shape.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// A fetched bibliographic record.
    Article,
    /// Normalized tokens for one article.
    Tokens,
    /// Per-decade aggregate statistics.
    Decade,
    /// A rendered word-cloud image.
    Cloud,
    Error,
}

/// Error information attached to a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportError {
    pub code: String,
    pub message: String,
}

impl ReportError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// File path (CSV or image), using '/' as separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Publication decade bucket (e.g. 1990)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decade: Option<i32>,

    /// Article title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Structured data payload (token lists, decade aggregates, render
    /// settings) embedded directly rather than JSON-in-string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ReportError>,
}

impl ResultItem {
    /// Create a new article result
    pub fn article(title: impl Into<String>, decade: Option<i32>) -> Self {
        Self {
            kind: Kind::Article,
            path: None,
            decade,
            title: Some(title.into()),
            data: None,
            errors: Vec::new(),
        }
    }

    /// Create a new tokens result
    pub fn tokens(title: impl Into<String>, decade: Option<i32>, tokens: &[String]) -> Self {
        Self {
            kind: Kind::Tokens,
            path: None,
            decade,
            title: Some(title.into()),
            data: Some(serde_json::json!({ "tokens": tokens })),
            errors: Vec::new(),
        }
    }

    /// Create a new decade aggregate result
    pub fn decade(decade: i32) -> Self {
        Self {
            kind: Kind::Decade,
            path: None,
            decade: Some(decade),
            title: None,
            data: None,
            errors: Vec::new(),
        }
    }

    /// Create a new cloud result for a written image
    pub fn cloud(path: impl Into<String>, decade: i32) -> Self {
        Self {
            kind: Kind::Cloud,
            path: Some(path.into()),
            decade: Some(decade),
            title: None,
            data: None,
            errors: Vec::new(),
        }
    }

    /// Create a new error result
    pub fn error(error: ReportError) -> Self {
        Self {
            kind: Kind::Error,
            path: None,
            decade: None,
            title: None,
            data: None,
            errors: vec![error],
        }
    }

    /// Set the file path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Add an error
    #[allow(dead_code)]
    pub fn with_error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Sort items by decade, then path, then title for stable output
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| {
            match (a.decade, b.decade) {
                (Some(da), Some(db)) if da != db => return da.cmp(&db),
                (Some(_), None) => return std::cmp::Ordering::Less,
                (None, Some(_)) => return std::cmp::Ordering::Greater,
                _ => {}
            }
            match (&a.path, &b.path) {
                (Some(pa), Some(pb)) if pa != pb => return pa.cmp(pb),
                (Some(_), None) => return std::cmp::Ordering::Less,
                (None, Some(_)) => return std::cmp::Ordering::Greater,
                _ => {}
            }
            a.title.cmp(&b.title)
        });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
