use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::database::{DirectoryError, ErrorKind};

#[derive(Debug)]
pub enum ApiError {
    Directory(DirectoryError),
    MissingEmail,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Directory(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            },
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::Directory(e) => e.to_string(),
            ApiError::MissingEmail => "email query parameter is required".to_string(),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError::Directory(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
