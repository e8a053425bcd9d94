use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

use common::GameError;
use common::log;

/// Structured error body returned to API clients.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Boundary wrapper translating core errors into HTTP responses. Expected
/// conditions keep their message; corrupt state and internal failures are
/// logged server-side and replaced with a generic message.
#[derive(Debug)]
pub struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

pub fn status_for(err: &GameError) -> StatusCode {
    match err {
        GameError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        GameError::NotFound(_) => StatusCode::NOT_FOUND,
        GameError::CorruptState(_) | GameError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn status_label(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Not Found",
        _ => "Internal Server Error",
    }
}

pub fn client_message(err: &GameError) -> String {
    match err {
        GameError::InvalidArgument(message) | GameError::NotFound(message) => message.clone(),
        GameError::CorruptState(_) | GameError::Internal(_) => {
            "An unexpected error occurred. Please try again later.".to_string()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            log!("Request failed: {:?}", self.0);
        }

        let body = ApiErrorResponse {
            timestamp: Utc::now().to_rfc3339(),
            status: status.as_u16(),
            error: status_label(status).to_string(),
            message: client_message(&self.0),
        };
        (status, Json(body)).into_response()
    }
}
