use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound(resource.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message) = match self {
            ApiError::Validation(ref message) => {
                tracing::debug!("Rejected request body: {}", message);
                ("VALIDATION_ERROR", message.clone())
            }
            ApiError::NotFound(ref resource) => {
                // Same default the browser mocking layer applies to unhandled requests
                tracing::warn!("Unhandled request: {}", resource);
                ("NOT_FOUND", format!("{} not found", resource))
            }
            ApiError::Internal(ref err) => {
                tracing::error!("Internal server error while rendering fixture: {:#}", err);
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(err).context("fixture serialization failed"))
    }
}

// Result type alias for convenience
pub type ApiResult<T> = Result<T, ApiError>;
