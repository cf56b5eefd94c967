use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error("Missing email query parameter")]
    MissingEmail,
    #[error("Invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
    #[error("Failed to render page")]
    Render(#[from] askama::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Roster(RosterError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Roster(RosterError::AlreadyRegistered)
            | ApiError::Roster(RosterError::NotRegistered) => StatusCode::BAD_REQUEST,
            ApiError::MissingEmail | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Render(e) = &self {
            tracing::error!(error = %e, "template render failed");
        }
        let body = Json(json!({ "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}
