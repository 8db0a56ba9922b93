use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::shared::core::primitives::RecipeId;
use crate::shell::state::AppState;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteRecipeResponse {
    pub deleted: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<RecipeId>,
) -> impl IntoResponse {
    match state.delete_handler.handle(id).await {
        Ok(deleted) => Json(DeleteRecipeResponse { deleted }).into_response(),
        Err(e) => {
            error!(recipe_id = id, error = %e, "failed to delete recipe");
            e.into_response()
        }
    }
}
