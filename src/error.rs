use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised while loading the course catalog.
///
/// Catalog loading happens once at startup; any of these is fatal and the
/// process must not begin serving.
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog source: {0}")]
    Read(#[from] csv::Error),

    #[error("catalog source is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("catalog source contains no course rows")]
    Empty,
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::UserNotFound(_) | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, self.to_string())
            }
            AppError::InvalidParameter(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Catalog(_) | AppError::Store(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
