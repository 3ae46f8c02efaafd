//! Static text pages outside the catalog.

use axum::extract::Path;
use axum::response::Response;

pub async fn home() -> Response {
    super::found("/catalog")
}

pub async fn about() -> &'static str {
    "index router's about page"
}

pub async fn wiki() -> &'static str {
    "Wiki router's index page"
}

pub async fn wiki_about() -> &'static str {
    "Wiki router's about page"
}

pub async fn wiki_user_book(Path((user_id, book_id)): Path<(String, String)>) -> String {
    tracing::debug!(%user_id, %book_id, "Wiki page");
    format!("Wiki router's specific page{user_id}{book_id}")
}
