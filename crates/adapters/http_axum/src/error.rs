//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use scurry_domain::error::ScurryError;

/// Maps [`ScurryError`] to an HTTP response with the appropriate status code.
///
/// Handler-level failures carry a bare status and empty body; the plain-text
/// `404 Not Found` body is reserved for the routing fallback.
pub struct ApiError(ScurryError);

impl From<ScurryError> for ApiError {
    fn from(err: ScurryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScurryError::Validation(_) => StatusCode::BAD_REQUEST,
            ScurryError::NotFound(_) => StatusCode::NOT_FOUND,
            ScurryError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
