use book_search_service::app;
use book_search_service::services::books::BooksClient;
use tracing::{info, warn};

const DEFAULT_PROVIDER_URL: &str = "https://www.googleapis.com/books/v1/volumes";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("book_search_service=info,tower_http=info")
        .init();

    let base_url = std::env::var("GOOGLE_BOOKS_API_URL")
        .unwrap_or_else(|_| DEFAULT_PROVIDER_URL.to_string());
    let api_key = std::env::var("GOOGLE_BOOKS_API_KEY").ok();

    if api_key.is_none() {
        warn!("GOOGLE_BOOKS_API_KEY is not set; search requests will be rejected");
    }

    let client = BooksClient::new(base_url, api_key);
    let app = app(client);

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Book search service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
