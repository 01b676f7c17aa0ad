use axum::response::{IntoResponse, Response};
use axum::{http::StatusCode, Json};
use common::api::models::role::RoleValidationError;
use serde_json::json;
use thiserror::Error;

/// Represents a runtime error that needs to be mapped
/// to an HTTP response.
///
/// Rejected configurations and bad role names are user errors and map to
/// 4xx responses carrying their message. Storage faults map to 500 with the
/// detail kept out of the body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("missing role name")]
    MissingRoleName,
    #[error("role not found")]
    RoleNotFound,
    #[error("{0}")]
    InvalidRole(#[from] RoleValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] common::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, err_msg): (StatusCode, String) = match self {
            AppError::MissingRoleName => (StatusCode::BAD_REQUEST, "missing role name".into()),
            AppError::RoleNotFound => (StatusCode::NOT_FOUND, "role not found".into()),
            AppError::InvalidRole(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Storage(e) => {
                tracing::error!("Error in storage backend: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "error in storage backend".into(),
                )
            }
        };

        let body = Json(json!({
            "error": err_msg,
        }));

        (status, body).into_response()
    }
}
