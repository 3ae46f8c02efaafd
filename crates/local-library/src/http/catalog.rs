//! Handlers for `/catalog`.

use super::AppState;
use crate::controller::BookForm;
use crate::error::CatalogError;
use crate::model::BookId;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;

type Fields = Form<Vec<(String, String)>>;

/// An id that does not parse cannot name a book.
fn book_id(raw: &str) -> Result<BookId, CatalogError> {
    raw.parse()
        .map_err(|_| CatalogError::not_found("Book", raw))
}

pub async fn index(State(state): State<AppState>) -> Result<Response, CatalogError> {
    let response = state.controller.index().await?;
    Ok(state.respond(response))
}

pub async fn book_list(State(state): State<AppState>) -> Result<Response, CatalogError> {
    let response = state.controller.book_list().await?;
    Ok(state.respond(response))
}

pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let response = state.controller.book_detail(book_id(&id)?).await?;
    Ok(state.respond(response))
}

pub async fn book_create_get(State(state): State<AppState>) -> Result<Response, CatalogError> {
    let response = state.controller.book_create_get().await?;
    Ok(state.respond(response))
}

pub async fn book_create_post(
    State(state): State<AppState>,
    Form(fields): Fields,
) -> Result<Response, CatalogError> {
    let form = BookForm::from_fields(fields);
    let response = state.controller.book_create_post(form).await?;
    Ok(state.respond(response))
}

pub async fn book_delete_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, CatalogError> {
    let response = state.controller.book_delete_get(book_id(&id)?).await?;
    Ok(state.respond(response))
}

/// The book to delete comes from the form's `id` field, or the path when absent.
pub async fn book_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Fields,
) -> Result<Response, CatalogError> {
    let raw = fields
        .iter()
        .find(|(name, _)| name == "id")
        .map_or(id.as_str(), |(_, value)| value.as_str());
    let response = state.controller.book_delete_post(book_id(raw)?).await?;
    Ok(state.respond(response))
}

pub async fn book_update_get(State(state): State<AppState>) -> Response {
    state.respond(state.controller.book_update_get())
}

pub async fn book_update_post(State(state): State<AppState>) -> Response {
    state.respond(state.controller.book_update_post())
}
