use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

/// Stable error code surfaced to API callers in place of raw store errors.
/// The underlying detail goes to the log only.
pub const STORE_ERROR_CODE: &str = "store_error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Persistence access failure. `context` is the caller-facing message;
    /// the source error is logged, never serialized.
    #[error("{context}")]
    Store {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found() -> Self {
        AppError::NotFound("Product not found.".to_string())
    }

    /// Adapter for `map_err` on store gateway calls.
    pub fn store(context: &'static str) -> impl FnOnce(sea_orm::DbErr) -> AppError {
        move |source| AppError::Store {
            context: context.to_string(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, ApiResponse<serde_json::Value>) = match &self {
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ApiResponse::failure(message))
            }
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, ApiResponse::failure(message)),
            AppError::Store { context, source } => {
                tracing::error!(error = %source, "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure_with_error(context, STORE_ERROR_CODE),
                )
            }
            AppError::Internal(source) => {
                tracing::error!(error = %source, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::failure(self.to_string()),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("Product code is required.".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = AppError::store("Error retrieving product data!")(
            sea_orm::DbErr::Custom("connection reset".into()),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
