//! # Error Handling Middleware
//!
//! Maps scheduling errors to HTTP status codes and JSON error bodies. Every
//! body carries the human message and a stable `code`, so a client can tell a
//! lost slot (`slot_already_booked`, refresh availability and retry) from any
//! other failure.

use agenda_core::errors::AgendaError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// JSON body extractor whose rejections answer with the same `{error, code}`
/// body as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Application error wrapper that provides HTTP status code mapping
#[derive(Debug)]
pub struct AppError(pub AgendaError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AgendaError::InvalidRequest(_)
            | AgendaError::InvalidDate(_)
            | AgendaError::InvalidSlot(_)
            | AgendaError::MissingNote => StatusCode::BAD_REQUEST,
            AgendaError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            AgendaError::Unauthorized(_) => StatusCode::FORBIDDEN,
            AgendaError::NotFound(_) => StatusCode::NOT_FOUND,
            AgendaError::SlotAlreadyBooked { .. } => StatusCode::CONFLICT,
            AgendaError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let AgendaError::StoreUnavailable(report) = &self.0 {
            error!(error = ?report, "Booking store failure");
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "code": self.0.code(),
        }));

        (status, body).into_response()
    }
}

/// Automatic conversion from AgendaError to AppError
impl From<AgendaError> for AppError {
    fn from(err: AgendaError) -> Self {
        AppError(err)
    }
}

/// Backend failures reported through eyre surface as an unavailable store.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AgendaError::StoreUnavailable(err))
    }
}

/// Unreadable request bodies are reported as `invalid_request`.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(AgendaError::InvalidRequest(rejection.body_text()))
    }
}
