use axum::{http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;

/// Failures talking to one of the upstream APIs.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Unavailable(String),
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Rejected(String),
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Plain-text bodies: the message is the whole payload.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
