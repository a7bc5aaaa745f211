//! HTTP mapping for `SonarPromError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use sonarprom_core::error::SonarPromError;

/// Wrapper so core errors can be returned from axum handlers.
#[derive(Debug)]
pub struct ApiError(pub SonarPromError);

impl From<SonarPromError> for ApiError {
    fn from(e: SonarPromError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SonarPromError::BadRequest(_) => StatusCode::BAD_REQUEST,
            SonarPromError::Upstream(_) => StatusCode::BAD_GATEWAY,
            SonarPromError::UnsupportedVersion | SonarPromError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (self.status(), body).into_response()
    }
}
