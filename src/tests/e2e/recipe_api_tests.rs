use crate::modules::recipes::adapters::outbound::sqlite::SqliteRecipeStore;
use crate::modules::recipes::core::mapping::{to_storage, to_ui};
use crate::modules::recipes::core::record::RecipeRecord;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::recipes::RecipeBuilder;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

async fn app() -> Router {
    let store = SqliteRecipeStore::in_memory().await.unwrap();
    router(AppState::new(Arc::new(store)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn creates_lists_and_deletes_a_recipe() {
    let app = app().await;

    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/recipes",
            json!({
                "bean_name": "Yirgacheffe",
                "input_grams": 18,
                "output_grams": 36,
                "brewing_time": 28,
                "grind_size": 20
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);

    let (status, listed) = send(&app, get("/api/recipes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
    assert_eq!(listed[0]["bean_name"], "Yirgacheffe");
    assert_eq!(listed[0]["input_grams"], 18.0);
    assert_eq!(listed[0]["output_grams"], 36.0);
    assert_eq!(listed[0]["brewing_time"], 28);
    assert_eq!(listed[0]["grind_size"], 20.0);

    let (status, deleted) = send(
        &app,
        Request::delete("/api/recipes/1").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"deleted": 1}));

    let (status, listed) = send(&app, get("/api/recipes")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn replaces_every_field_of_a_recipe_on_put() {
    let app = app().await;
    let draft = RecipeBuilder::new().with_filter().build();

    let (_, created) = send(
        &app,
        json_request("POST", "/api/recipes", serde_json::to_value(to_storage(&draft)).unwrap()),
    )
    .await;
    let created: RecipeRecord = serde_json::from_value(created).unwrap();

    let mut edited = to_ui(&created);
    edited.is_archived = true;
    edited.filter.taste.acidity = 9;
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/api/recipes/1",
            serde_json::to_value(to_storage(&edited)).unwrap(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let updated: RecipeRecord = serde_json::from_value(updated).unwrap();
    assert_eq!(to_ui(&updated), edited);

    let (_, listed) = send(&app, get("/api/recipes")).await;
    let listed: Vec<RecipeRecord> = serde_json::from_value(listed).unwrap();
    assert_eq!(listed, vec![updated]);
}

#[tokio::test]
async fn reports_errors_with_a_message_body() {
    let app = app().await;

    let (status, body) = send(
        &app,
        json_request("POST", "/api/recipes", json!({"bean_name": "Sidamo"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "either espresso dose and yield or filter dose and water must be positive"
    );

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            "/api/recipes/40",
            json!({"bean_name": "Sidamo", "filter_input_grams": 15, "filter_water_grams": 250}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "recipe 40 not found");

    let (status, body) = send(
        &app,
        Request::delete("/api/recipes/40").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"deleted": 0}));
}
