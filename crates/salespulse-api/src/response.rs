//! JSON response envelope shared by all API routes.
//!
//! Every endpoint answers `{"success": bool, ...}`: successes wrap their
//! payload under `data`, failures carry a generic `error` plus the concrete
//! `details` string. Internal failures map to HTTP 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::json;

use salespulse_core::error::{ClientCode, SalesPulseError};

/// Success envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": data,
            "timestamp": Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}

/// Error wrapper implementing the failure envelope.
#[derive(Debug)]
pub struct ApiError(pub SalesPulseError);

impl From<SalesPulseError> for ApiError {
    fn from(e: SalesPulseError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let error = match code {
            ClientCode::BadRequest => "invalid request",
            ClientCode::NotFound => "not found",
            ClientCode::UnsupportedVersion => "unsupported version",
            ClientCode::Internal => "internal error",
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = code.as_str(), details = %self.0, "request failed");
        }

        (
            status,
            Json(json!({
                "success": false,
                "error": error,
                "details": self.0.to_string(),
                "timestamp": Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}
