use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend is unavailable.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn degraded_mode_maps_to_service_unavailable() {
        let app_err: AppError = ServiceError::Degraded.into();
        match app_err {
            AppError::ServiceUnavailable(message) => assert_eq!(message, "degraded mode"),
            other => panic!("expected service unavailable, got {other:?}"),
        }
    }

    #[test]
    fn storage_failures_map_to_service_unavailable() {
        let storage = StorageError::unavailable(
            "ping failed".into(),
            io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        );
        let app_err: AppError = ServiceError::from(storage).into();
        match app_err {
            AppError::ServiceUnavailable(message) => assert!(message.contains("ping failed")),
            other => panic!("expected service unavailable, got {other:?}"),
        }
    }

    #[test]
    fn missing_puzzle_maps_to_not_found() {
        let app_err: AppError = ServiceError::NotFound("no puzzle for 2026-08-31".into()).into();
        match app_err {
            AppError::NotFound(message) => assert!(message.contains("2026-08-31")),
            other => panic!("expected not found, got {other:?}"),
        }
    }
}
