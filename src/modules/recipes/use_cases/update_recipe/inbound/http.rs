use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, error};

use crate::modules::recipes::adapters::outbound::recipe_repository::RepositoryError;
use crate::modules::recipes::core::record::RecipeFields;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::RecipeId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
    body: Result<Json<RecipeFields>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(e) => {
            debug!(recipe_id = id, error = %e, "malformed recipe body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.update_handler.handle(id, fields).await {
        Ok(record) => Json(record).into_response(),
        Err(
            e @ (ApplicationError::Validation(_)
            | ApplicationError::Repository(RepositoryError::NotFound { .. })),
        ) => e.into_response(),
        Err(e) => {
            error!(recipe_id = id, error = %e, "failed to update recipe");
            e.into_response()
        }
    }
}
