use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod models;
pub mod routes;
pub mod services;

use routes::health::health_check;
use routes::search::{search_books, BOOK_SEARCH_PATH};
use services::books::BooksClient;

pub fn app(client: BooksClient) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route(BOOK_SEARCH_PATH, get(search_books))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}
