use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// A required field was missing or empty. No store operation was attempted.
    Validation,
    NotFound,
    /// Persistence failure on a write the caller could plausibly fix (bad payload
    /// reaching the store). Maps to 400 with the store's own message.
    Store(sqlx::Error),
    /// Persistence failure that is not the caller's fault. Maps to 500.
    Db(sqlx::Error),
    /// Note id on the delete path that does not parse as a UUID. A server
    /// fault, unlike the 400 the patch route's extractor produces.
    BadId(uuid::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "VALIDATION",
                    message: "Title and content are required.".to_string(),
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "NOT_FOUND",
                    message: "Note not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Store(e) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "STORE",
                    message: e.to_string(),
                }),
            )
                .into_response(),
            ApiError::Db(e) => {
                tracing::error!("db error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "INTERNAL",
                        message: e.to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::BadId(e) => {
                tracing::error!("bad note id: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "INTERNAL",
                        message: e.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
