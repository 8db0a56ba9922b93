use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::recipes::use_cases::create_recipe::inbound::http as create_http;
use crate::modules::recipes::use_cases::delete_recipe::inbound::http as delete_http;
use crate::modules::recipes::use_cases::list_recipes::inbound::http as list_http;
use crate::modules::recipes::use_cases::update_recipe::inbound::http as update_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/recipes",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/recipes/{id}",
            put(update_http::handle).delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
