use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Missing identity in update form")]
    MissingIdentity,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound { .. })
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(Box::new(e))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            AppError::InvalidForm(reason) => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "INVALID_FORM".to_string(),
                    message: reason,
                };
                (status, body)
            }
            AppError::MissingIdentity => {
                let status = StatusCode::BAD_REQUEST;
                let body = ApiErrorBody {
                    code: "INVALID_FORM".to_string(),
                    message: "Update requires an id.".to_string(),
                };
                (status, body)
            }
            AppError::NotFound { entity, id } => {
                let status = StatusCode::NOT_FOUND;
                let body = ApiErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("No {entity} with id {id}."),
                };
                (status, body)
            }
            AppError::DatabaseError(_) | AppError::Config(_) | AppError::Io(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                (status, body)
            }
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
