//! PubMed retrieval via the NCBI E-utilities API

pub mod client;

pub use client::PubMedClient;

use thiserror::Error;

/// Errors produced by the E-utilities client.
#[derive(Debug, Error)]
pub enum PubMedError {
    #[error("E-utilities request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected esearch payload: {0}")]
    Esearch(String),

    #[error("unexpected esummary payload: {0}")]
    Esummary(String),
}
