//! The error handler: every [`CatalogError`] a handler returns ends up here.

use crate::error::CatalogError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self, "Request failed");
            (status, "Internal Server Error").into_response()
        } else {
            warn!(error = %self, status = status.as_u16(), "Request rejected");
            (status, self.to_string()).into_response()
        }
    }
}
