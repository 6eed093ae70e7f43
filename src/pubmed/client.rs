//! NCBI E-utilities client
//!
//! Endpoints used:
//!   esearch:  https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi
//!   esummary: https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi
//!
//! esearch returns a paged PMID list for a query; esummary returns the
//! document summaries (title, pubdate) for a batch of PMIDs. Both are
//! requested with retmode=json. The `tool` and `email` parameters are not
//! required but kindly requested by NCBI:
//! https://www.ncbi.nlm.nih.gov/books/NBK25497/

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::pubmed::PubMedError;
use crate::store::Article;

const ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
const ESUMMARY_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// Delay between successive E-utilities requests. NCBI allows 3 req/s
/// without an API key.
const REQUEST_DELAY: Duration = Duration::from_millis(350);

/// esummary accepts at most a few hundred IDs per POST-less request.
const SUMMARY_BATCH: usize = 200;

/// esearch rejects retmax values above 10,000.
const ESEARCH_MAX_PAGE: usize = 10_000;

fn effective_page_size(requested: usize) -> usize {
    requested.clamp(1, ESEARCH_MAX_PAGE)
}

/// One page of esearch results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EsearchPage {
    /// Total hits for the query, independent of paging.
    pub count: usize,
    /// PMIDs on this page.
    pub ids: Vec<String>,
}

/// Blocking client for PubMed E-utilities.
pub struct PubMedClient {
    http: reqwest::blocking::Client,
    tool: String,
    email: Option<String>,
    api_key: Option<String>,
}

impl PubMedClient {
    pub fn new(email: Option<String>, api_key: Option<String>) -> Result<Self, PubMedError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("pubcloud/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            tool: "pubcloud".to_string(),
            email,
            api_key,
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("retmode", "json".to_string()),
            ("tool", self.tool.clone()),
        ];
        if let Some(email) = &self.email {
            params.push(("email", email.clone()));
        }
        if let Some(key) = &self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Fetch one esearch page.
    fn esearch(&self, query: &str, retstart: usize, retmax: usize) -> Result<EsearchPage, PubMedError> {
        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("term", query.to_string()));
        params.push(("retstart", retstart.to_string()));
        params.push(("retmax", retmax.to_string()));

        let body = self
            .http
            .get(ESEARCH_URL)
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;

        let page = parse_esearch(&body)?;
        debug!(retstart, returned = page.ids.len(), total = page.count, "esearch page");
        Ok(page)
    }

    /// Fetch document summaries for a batch of PMIDs.
    fn esummary(&self, pmids: &[String]) -> Result<Vec<Article>, PubMedError> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.base_params();
        params.push(("db", "pubmed".to_string()));
        params.push(("id", pmids.join(",")));

        let body = self
            .http
            .get(ESUMMARY_URL)
            .query(&params)
            .send()?
            .error_for_status()?
            .text()?;

        parse_esummary(&body)
    }

    /// Collect PMIDs for a query, paging until `max_results` or the result
    /// set is exhausted.
    pub fn search_ids(
        &self,
        query: &str,
        max_results: usize,
        page_size: usize,
    ) -> Result<Vec<String>, PubMedError> {
        let page_size = effective_page_size(page_size);
        let mut ids: Vec<String> = Vec::new();

        loop {
            let remaining = max_results.saturating_sub(ids.len());
            if remaining == 0 {
                break;
            }

            let page = self.esearch(query, ids.len(), page_size.min(remaining))?;
            let got = page.ids.len();
            ids.extend(page.ids);

            if got == 0 || ids.len() >= page.count || ids.len() >= max_results {
                break;
            }
            std::thread::sleep(REQUEST_DELAY);
        }

        ids.truncate(max_results);
        Ok(ids)
    }

    /// Fetch article summaries in batches, reporting progress per batch.
    pub fn summaries<F>(&self, pmids: &[String], mut on_batch: F) -> Result<Vec<Article>, PubMedError>
    where
        F: FnMut(usize),
    {
        let mut articles = Vec::with_capacity(pmids.len());

        for chunk in pmids.chunks(SUMMARY_BATCH) {
            let batch = self.esummary(chunk)?;
            on_batch(chunk.len());
            articles.extend(batch);
            std::thread::sleep(REQUEST_DELAY);
        }

        Ok(articles)
    }
}

/// Parse an esearch JSON payload into a page of PMIDs.
pub fn parse_esearch(body: &str) -> Result<EsearchPage, PubMedError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| PubMedError::Esearch(e.to_string()))?;

    let result = json
        .get("esearchresult")
        .ok_or_else(|| PubMedError::Esearch("missing esearchresult".to_string()))?;

    let count = result
        .get("count")
        .and_then(|c| c.as_str())
        .and_then(|c| c.parse::<usize>().ok())
        .ok_or_else(|| PubMedError::Esearch("missing count".to_string()))?;

    let ids = result
        .get("idlist")
        .and_then(|l| l.as_array())
        .map(|l| {
            l.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    Ok(EsearchPage { count, ids })
}

/// Parse an esummary JSON payload into articles.
///
/// The payload keys each document summary by its UID under `result`, with
/// the UID order given by `result.uids`. Summaries without a title are
/// skipped with a warning.
pub fn parse_esummary(body: &str) -> Result<Vec<Article>, PubMedError> {
    let json: Value =
        serde_json::from_str(body).map_err(|e| PubMedError::Esummary(e.to_string()))?;

    let result = json
        .get("result")
        .ok_or_else(|| PubMedError::Esummary("missing result".to_string()))?;

    let uids: Vec<String> = result
        .get("uids")
        .and_then(|l| l.as_array())
        .map(|l| {
            l.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default();

    let mut articles = Vec::with_capacity(uids.len());
    for uid in uids {
        let Some(doc) = result.get(&uid) else {
            warn!(pmid = %uid, "esummary result missing document for uid");
            continue;
        };

        let title = doc.get("title").and_then(|t| t.as_str()).unwrap_or("");
        if title.is_empty() {
            warn!(pmid = %uid, "skipping article without title");
            continue;
        }

        let pubdate = doc
            .get("pubdate")
            .and_then(|d| d.as_str())
            .unwrap_or("")
            .to_string();

        articles.push(Article::new(uid, title, pubdate));
    }

    Ok(articles)
}
