//! # Error Handling Middleware
//!
//! Maps `ContactError` values to HTTP status codes and the endpoint's JSON
//! body, `{"status": "error", "message": ...}`.
//!
//! Storage failures answer with a fixed message. Their detail
//! is written to the server log and never sent to the caller.

use agence_core::{errors::ContactError, models::response::ApiResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::{http::StatusCode, Json};
/// use agence_api::middleware::error_handling::AppError;
/// use agence_core::{errors::ContactError, models::response::ApiResponse};
///
/// async fn handler(email: String) -> Result<(StatusCode, Json<ApiResponse>), AppError> {
///     if email.is_empty() {
///         return Err(AppError(ContactError::Validation("Email requis".to_string())));
///     }
///     Ok((StatusCode::CREATED, Json(ApiResponse::success("ok"))))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ContactError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ContactError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("Contact submission failed: {:?}", self.0);
        }

        let body = Json(ApiResponse::error(self.0.public_message()));
        (status, body).into_response()
    }
}

/// Allows `?` on `ContactResult` inside handlers.
impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        AppError(err)
    }
}

/// Repository errors are storage failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ContactError::Database(err))
    }
}

/// Maps a ContactError to an HTTP response
pub fn map_error(err: ContactError) -> Response {
    AppError(err).into_response()
}
