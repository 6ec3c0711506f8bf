//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unknown location: {name}")]
    UnknownLocation { name: String, known: Vec<String> },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::UnknownLocation { known, .. } => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: message,
                    locations: known,
                }),
            )
                .into_response(),
        }
    }
}
