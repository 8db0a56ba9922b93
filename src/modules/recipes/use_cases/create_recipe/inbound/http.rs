use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, error};

use crate::modules::recipes::core::record::RecipeFields;
use crate::modules::recipes::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecipeFields>, JsonRejection>,
) -> impl IntoResponse {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(e) => {
            debug!(error = %e, "malformed recipe body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.create_handler.handle(fields).await {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e @ ApplicationError::Validation(_)) => e.into_response(),
        Err(e) => {
            error!(error = %e, "failed to create recipe");
            e.into_response()
        }
    }
}
