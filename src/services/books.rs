use crate::models::book::Book;
use crate::models::provider::{VolumeItem, VolumesResponse};
use crate::services::query::{SearchCriteria, MAX_RESULTS, PRINT_TYPE};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("API key is missing")]
    MissingApiKey,
    #[error("At least one search parameter is required")]
    EmptyCriteria,
    #[error("No book found with the provided query")]
    NotFound,
    #[error("provider responded with status {0}")]
    Upstream(u16),
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed provider payload: {0}")]
    Malformed(String),
}

/// Client for the Google Books volumes endpoint.
///
/// Holds no per-request state; each search owns its criteria, query string
/// and outcome, so concurrent requests never alias.
#[derive(Clone)]
pub struct BooksClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl BooksClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    /// Runs one search against the provider and normalizes the response.
    ///
    /// The credential check comes first (a missing key fails regardless of
    /// input), then criteria validation; only valid criteria reach the
    /// network. The composed query string is percent-encoded once, by the
    /// query-parameter serializer.
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Book>, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(SearchError::MissingApiKey)?;

        if criteria.is_empty() {
            return Err(SearchError::EmptyCriteria);
        }

        let query = criteria.to_query_string();
        debug!("Provider query: {}", query);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", query.as_str()), ("printType", PRINT_TYPE)])
            .query(&[("maxResults", MAX_RESULTS)])
            .query(&[("key", api_key)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Upstream(response.status().as_u16()));
        }

        let payload: VolumesResponse = response.json().await?;
        normalize(payload)
    }
}

/// Maps the raw provider payload into normalized records.
///
/// Zero reported matches is a distinct not-found outcome, never an empty
/// success. Mapping is all-or-nothing: one malformed item fails the whole
/// request rather than producing a partially valid sequence.
pub fn normalize(payload: VolumesResponse) -> Result<Vec<Book>, SearchError> {
    if payload.total_items == 0 {
        return Err(SearchError::NotFound);
    }

    // A non-zero count with no items is a contract violation, not an empty
    // success; the outcome is always a non-empty sequence or a failure.
    if payload.items.is_empty() {
        return Err(SearchError::Malformed(
            "non-zero totalItems with no items".to_string(),
        ));
    }

    payload.items.into_iter().map(normalize_item).collect()
}

fn normalize_item(item: VolumeItem) -> Result<Book, SearchError> {
    // The id is provider-assigned and required; its absence is a contract
    // violation, not something to paper over with a placeholder.
    let id = item
        .id
        .ok_or_else(|| SearchError::Malformed("volume item without an id".to_string()))?;

    let info = item.volume_info;

    Ok(Book {
        id,
        title: info.title,
        authors: info.authors.unwrap_or_default(),
        categories: info.categories.unwrap_or_default(),
        description: info.description,
        thumbnail: info.image_links.and_then(|links| links.thumbnail),
    })
}
