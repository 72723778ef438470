use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::models::ErrorResponse;
use crate::error::Error;

/// Message shown when any input field is missing or unreadable
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid values";

/// Errors a handler can answer with
#[derive(Debug)]
pub enum AppError {
    /// One or more input fields could not be read
    InvalidInput,
    /// Malformed request outside the calculation fields
    BadRequest(String),
    /// Library error
    Calculation(Error),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("INVALID_INPUT", INVALID_INPUT_MESSAGE),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("BAD_REQUEST", msg),
            ),
            AppError::Calculation(e) => match e {
                Error::NonFinite(_) | Error::NonConvergent(_) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ErrorResponse::new("GEODESY_ERROR", e.to_string()),
                ),
                Error::InvalidFormat(_) | Error::Csv(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("INVALID_BATCH", e.to_string()),
                ),
                other => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("INTERNAL_ERROR", other.to_string()),
                ),
            },
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::Calculation(err)
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
