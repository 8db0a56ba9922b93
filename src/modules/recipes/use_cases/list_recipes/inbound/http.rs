use axum::{Json, extract::State, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.list_handler.handle().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            error!(error = %e, "failed to list recipes");
            e.into_response()
        }
    }
}
