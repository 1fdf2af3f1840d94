use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use condense_common::CondenseError;

use crate::types::ErrorResponse;

/// CondenseError wrapper carrying HTTP semantics
#[derive(Debug)]
pub struct ApiError(pub CondenseError);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CondenseError> for ApiError {
    fn from(err: CondenseError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}
