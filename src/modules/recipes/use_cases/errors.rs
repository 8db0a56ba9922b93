use crate::modules::recipes::adapters::outbound::recipe_repository::RepositoryError;
use crate::modules::recipes::core::validation::ValidationError;
use crate::shared::infrastructure::http_error::error_response;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::Validation(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApplicationError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}
