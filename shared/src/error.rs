use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Every rejection the booking core can produce, mapped one-to-one onto an
/// HTTP status and a client-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MalformedInput(String),
    #[error("Duration is out of allowed range.")]
    DurationOutOfRange,
    #[error("Cannot book in the past.")]
    PastDate,
    #[error("Start time must be on the hour.")]
    MisalignedStartTime,
    #[error("Selected start time is outside venue operating hours.")]
    OutsideOperatingHours,
    #[error("Selected duration exceeds operating hours.")]
    DurationExceedsHours,
    #[error("Selected time slot has already been booked.")]
    SlotTaken,
    #[error("Invalid or missing date parameter.")]
    InvalidDateParameter,
    #[error("{0}")]
    EntityNotFound(String),
    #[error("Authentication required.")]
    UnauthenticatedError,
    #[error("transaction error")]
    TransactionError(#[source] sqlx::Error),
    #[error("database operation error")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedInput(_)
            | AppError::DurationOutOfRange
            | AppError::PastDate
            | AppError::MisalignedStartTime
            | AppError::OutsideOperatingHours
            | AppError::DurationExceedsHours
            | AppError::InvalidDateParameter => StatusCode::BAD_REQUEST,
            AppError::UnauthenticatedError => StatusCode::UNAUTHORIZED,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::SlotTaken => StatusCode::CONFLICT,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
            return (
                status_code,
                Json(json!({ "error": "Internal server error." })),
            )
                .into_response();
        }

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
