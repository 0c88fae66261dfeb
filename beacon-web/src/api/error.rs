//! API Error Handling
//!
//! Maps page failures to HTTP responses. Failures are logged where they are
//! detected, so responses here carry only a status and an empty body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::service::build_page::BuildPageError;

/// API error type
#[derive(Debug)]
pub enum ApiError {
    BadRequest,
    NotFound,
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.status().into_response()
    }
}

impl From<BuildPageError> for ApiError {
    fn from(err: BuildPageError) -> Self {
        match err {
            BuildPageError::MissingParameters => ApiError::BadRequest,
            BuildPageError::NotFound => ApiError::NotFound,
            BuildPageError::Upstream { .. } | BuildPageError::Render { .. } => {
                ApiError::InternalError
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
