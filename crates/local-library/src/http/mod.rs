//! # HTTP Surface
//!
//! Binds the controller actions to routes with `axum`. Handlers only translate: path and
//! form in, [`controller::Response`](crate::controller::Response) out. A returned
//! [`CatalogError`] is turned into a status code by the error handler in [`error`].
//!
//! | Method | Path | Action |
//! |---|---|---|
//! | GET | `/catalog` | index |
//! | GET | `/catalog/books` | book_list |
//! | GET, POST | `/catalog/book/create` | book_create |
//! | GET | `/catalog/book/:id` | book_detail |
//! | GET, POST | `/catalog/book/:id/delete` | book_delete |
//! | GET, POST | `/catalog/book/:id/update` | book_update |

pub mod catalog;
pub mod error;
pub mod pages;
pub mod render;

pub use render::{JsonRenderer, ViewRenderer};

use crate::controller::{self, CatalogController};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: CatalogController,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl AppState {
    pub fn new(controller: CatalogController, renderer: impl ViewRenderer + 'static) -> Self {
        Self {
            controller,
            renderer: Arc::new(renderer),
        }
    }

    /// Turns a controller response into an HTTP one.
    pub fn respond(&self, response: controller::Response) -> Response {
        match response {
            controller::Response::Render(view) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, self.renderer.content_type())],
                self.renderer.render(&view),
            )
                .into_response(),
            controller::Response::Redirect(to) => found(&to),
            controller::Response::Text(body) => (StatusCode::OK, body).into_response(),
        }
    }
}

/// `302 Found` to `to`.
pub fn found(to: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, to.to_string())]).into_response()
}

pub fn router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(catalog::index))
        .route("/books", get(catalog::book_list))
        .route(
            "/book/create",
            get(catalog::book_create_get).post(catalog::book_create_post),
        )
        .route("/book/:id", get(catalog::book_detail))
        .route(
            "/book/:id/delete",
            get(catalog::book_delete_get).post(catalog::book_delete_post),
        )
        .route(
            "/book/:id/update",
            get(catalog::book_update_get).post(catalog::book_update_post),
        );

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/wiki", get(pages::wiki))
        .route("/wiki/about", get(pages::wiki_about))
        .route(
            "/wiki/about/:user_id/books/:book_id",
            get(pages::wiki_user_book),
        )
        .nest("/catalog", catalog)
        .with_state(state)
}
