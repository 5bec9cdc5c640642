use crate::models::book::Book;
use crate::models::responses::ErrorResponse;
use crate::services::books::{BooksClient, SearchError};
use crate::services::query::SearchCriteria;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info};

/// Single route identifier, shared by the router and any client of it.
pub const BOOK_SEARCH_PATH: &str = "/api/book-search";

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub intitle: Option<String>,
    pub inauthor: Option<String>,
}

type ErrorBody = (StatusCode, Json<ErrorResponse>);

pub async fn search_books(
    Query(params): Query<SearchParams>,
    State(client): State<BooksClient>,
) -> Result<Json<Vec<Book>>, ErrorBody> {
    info!("Search request: {:?}", params);

    let criteria = SearchCriteria::new(params.query, params.intitle, params.inauthor);

    match client.search(&criteria).await {
        Ok(books) => Ok(Json(books)),
        Err(e) => Err(error_response(e)),
    }
}

/// Maps a search failure to the caller-facing status and body. Internal
/// detail is logged here at the boundary, never returned to the caller.
fn error_response(err: SearchError) -> ErrorBody {
    let (status, message) = match &err {
        SearchError::MissingApiKey => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        SearchError::EmptyCriteria => (StatusCode::BAD_REQUEST, err.to_string()),
        SearchError::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
        SearchError::Upstream(code) => {
            error!("Provider returned error status {}", code);
            (
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                "Failed to fetch the book from API".to_string(),
            )
        }
        SearchError::Transport(cause) => {
            error!("Book search failed: {}", cause);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            )
        }
        SearchError::Malformed(detail) => {
            error!("Malformed provider payload: {}", detail);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An unexpected error occurred".to_string(),
            )
        }
    };

    (status, Json(ErrorResponse { error: message }))
}
