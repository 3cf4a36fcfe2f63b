use crate::models::ErrorResponse;
use crate::services::LlmError;
use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;

/// Errors surfaced to HTTP clients
///
/// Messages are coarse strings; parse failures also carry the raw model reply.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("No input sentences provided")]
    NoSentences,

    #[error(transparent)]
    Recommendation(#[from] LlmError),

    #[error("Server error: {0}")]
    Internal(String),
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidJson(_) | ApiError::NoSentences => StatusCode::BAD_REQUEST,
            ApiError::Recommendation(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Recommendation(LlmError::Parse { raw_response }) => ErrorResponse {
                error: self.to_string(),
                raw_response: Some(raw_response.clone()),
            },
            _ => ErrorResponse::new(self.to_string()),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}
