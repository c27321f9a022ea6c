use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use prscat_core::CatalogError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn catalog_error_response(
    err: CatalogError,
    operation: &str,
    category_id: Option<i64>,
) -> Response {
    let status = status_for_catalog_error(&err);
    let payload = err.to_payload(operation, category_id);
    if status.is_server_error() {
        error!(
            operation,
            category_id,
            trace_id = %payload.trace_id,
            error = %err,
            "catalog request failed"
        );
    }
    (status, Json(payload)).into_response()
}

/// Shorthand for a rejected request parameter.
pub fn validation_response(message: impl Into<String>, operation: &str) -> Response {
    catalog_error_response(CatalogError::Validation(message.into()), operation, None)
}

fn status_for_catalog_error(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) => StatusCode::BAD_REQUEST,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
        CatalogError::DataAccess { .. }
        | CatalogError::Io(_)
        | CatalogError::Json(_)
        | CatalogError::Sqlite(_)
        | CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
