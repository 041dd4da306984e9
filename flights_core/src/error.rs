//! Application error types and handling

use crate::models::ApiResponse;
use crate::services::{FlightNumberError, GenerationError};
use crate::validation::{ValidationReport, ViolationKind};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(ValidationReport),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownCarrier(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FlightNumberError> for AppError {
    fn from(err: FlightNumberError) -> Self {
        match err {
            FlightNumberError::UnknownCarrier(code) => AppError::UnknownCarrier(code),
            FlightNumberError::Malformed(_) => {
                let mut report = ValidationReport::success();
                report.add("flight_number", ViolationKind::InvalidFlightNumber, err.to_string());
                AppError::Validation(report)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(report) => {
                ApiResponse::error_with_details("Validation failed", report.messages())
            }
            AppError::BadRequest(msg) => ApiResponse::error_with_details("Invalid request", vec![msg]),
            AppError::UnknownCarrier(code) => ApiResponse::error_with_details(
                "Flight not found",
                vec![format!("Carrier '{}' is not served", code)],
            ),
            AppError::NotFound(msg) | AppError::MethodNotAllowed(msg) => ApiResponse::error(msg),
            AppError::Generation(err) => {
                tracing::error!("Flight generation error: {}", err);
                ApiResponse::error("Flight search failed")
            }
        };

        (status, Json(body)).into_response()
    }
}
