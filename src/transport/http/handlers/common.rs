use crate::app::ServiceError;
use crate::transport::http::types::ErrorResponse;
use crate::validation::Validator;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::msg(message))).into_response()
}

/// 400 carrying every field error collected in `v`.
pub fn validation_response(v: Validator) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            errors: v.into_errors(),
        }),
    )
        .into_response()
}

/// Maps a service failure to a response. Storage details stay in the logs.
pub fn service_error_response(err: ServiceError, action: &str) -> Response {
    match err {
        ServiceError::NotFound(_) => error_response(StatusCode::NOT_FOUND, "resource not found"),
        ServiceError::Enrichment(e) => {
            tracing::warn!(error = %e, action, "enrichment failed");
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
        ServiceError::Storage(e) => {
            tracing::error!(error = %e, action, "storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("failed to {action}"))
        }
    }
}

pub fn parse_id(raw: &str) -> Result<i64, Response> {
    raw.trim().parse::<i64>().map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("invalid id '{raw}': must be an integer"),
        )
    })
}
