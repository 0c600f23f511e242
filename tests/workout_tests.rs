use std::collections::HashMap;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use trainme::config::Config;

async fn spawn_app() -> Router {
    let mut config = Config::default();
    config.general.database_path = "sqlite::memory:".to_string();
    // A single connection keeps every query on the same in-memory database
    config.general.max_db_connections = 1;
    config.general.min_db_connections = 1;
    config.jwt.key = "integration-test-signing-key".to_string();

    let state = trainme::api::create_app_state_from_config(config)
        .await
        .expect("Failed to create app state");
    trainme::api::router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"));

    match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Registers a user and returns their access token.
async fn signup(app: &Router, username: &str) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/register")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({"userName": username, "password": "secret123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("Content-Type", "application/json")
                .body(Body::from(
                    json!({"userName": username, "password": "secret123"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["data"]["accessToken"].as_str().unwrap().to_string()
}

async fn create_item(app: &Router, token: &str, name: &str, day: i32, sort: i32) -> Value {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/workoutitems",
            token,
            Some(json!({"name": name, "dayOfWeek": day, "sortOrder": sort})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn workout_item_crud_flow() {
    let app = spawn_app().await;
    let token = signup(&app, "alice").await;

    let created = create_item(&app, &token, "Push-ups", 1, 1).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["name"], "Push-ups");
    assert_eq!(created["data"]["dayOfWeek"], 1);
    assert_eq!(created["data"]["sortOrder"], 1);
    assert!(created["data"]["updatedAt"].is_null());

    let response = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/workoutitems/{id}"),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/api/workoutitems/{id}"),
            &token,
            Some(json!({"name": "Wide push-ups", "dayOfWeek": 2, "sortOrder": 3})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Wide push-ups");
    assert_eq!(body["data"]["dayOfWeek"], 2);
    assert!(body["data"]["updatedAt"].is_string());

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/workoutitems/{id}"),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/workoutitems/{id}"),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_rejects_invalid_day() {
    let app = spawn_app().await;
    let token = signup(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/workoutitems",
            &token,
            Some(json!({"name": "Squats", "dayOfWeek": 8, "sortOrder": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems/day/0", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn foreign_items_cannot_be_modified() {
    let app = spawn_app().await;
    let owner = signup(&app, "alice").await;
    let other = signup(&app, "bob").await;

    let created = create_item(&app, &owner, "Plank", 3, 1).await;
    let id = created["data"]["id"].as_i64().unwrap();

    // Reads are not ownership-checked
    let response = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/workoutitems/{id}"),
            &other,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            &format!("/api/workoutitems/{id}"),
            &other,
            Some(json!({"name": "Hijacked", "dayOfWeek": 3, "sortOrder": 1})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .clone()
        .oneshot(request(
            "DELETE",
            &format!("/api/workoutitems/{id}"),
            &other,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still intact for the owner
    let response = app
        .clone()
        .oneshot(request(
            "GET",
            &format!("/api/workoutitems/{id}"),
            &owner,
            None,
        ))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Plank");
}

#[tokio::test]
async fn grouped_schedule_always_has_seven_days() {
    let app = spawn_app().await;
    let token = signup(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems/grouped", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let schedule = body["data"].as_object().unwrap();
    assert_eq!(schedule.len(), 7);
    for day in 1..=7 {
        assert!(schedule[&day.to_string()].as_array().unwrap().is_empty());
    }

    create_item(&app, &token, "Burpees", 2, 1).await;
    create_item(&app, &token, "Lunges", 2, 2).await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems/grouped", &token, None))
        .await
        .unwrap();
    let body = body_json(response).await;
    let tuesday_items = body["data"]["2"].as_array().unwrap();
    assert_eq!(tuesday_items.len(), 2);
    assert_eq!(tuesday_items[0]["name"], "Burpees");
    assert_eq!(tuesday_items[1]["name"], "Lunges");
}

#[tokio::test]
async fn reorder_validates_and_applies() {
    let app = spawn_app().await;
    let token = signup(&app, "alice").await;

    let first = create_item(&app, &token, "Squats", 1, 1).await;
    let second = create_item(&app, &token, "Plank", 1, 2).await;
    let first_id = first["data"]["id"].as_i64().unwrap();
    let second_id = second["data"]["id"].as_i64().unwrap();

    // An id from another day is rejected and nothing changes
    let elsewhere = create_item(&app, &token, "Burpees", 5, 1).await;
    let foreign_id = elsewhere["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/api/workoutitems/reorder",
            &token,
            Some(json!({
                "dayOfWeek": 1,
                "itemSortOrders": HashMap::from([(foreign_id.to_string(), 1)])
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Invalid workout item IDs")
    );

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/api/workoutitems/reorder",
            &token,
            Some(json!({"dayOfWeek": 1, "itemSortOrders": {}})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(request(
            "PUT",
            "/api/workoutitems/reorder",
            &token,
            Some(json!({
                "dayOfWeek": 1,
                "itemSortOrders": HashMap::from([
                    (first_id.to_string(), 2),
                    (second_id.to_string(), 1),
                ])
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems/day/1", &token, None))
        .await
        .unwrap();
    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items[0]["name"], "Plank");
    assert_eq!(items[1]["name"], "Squats");
}

#[tokio::test]
async fn duplicate_copies_to_target_day() {
    let app = spawn_app().await;
    let token = signup(&app, "alice").await;

    let created = create_item(&app, &token, "Push-ups", 1, 1).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            &format!("/api/workoutitems/{id}/duplicate"),
            &token,
            Some(json!({"targetDay": 4})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["data"]["name"], "Push-ups");
    assert_eq!(body["data"]["dayOfWeek"], 4);
    assert_eq!(body["data"]["sortOrder"], 1);
    assert!(body["message"].as_str().unwrap().contains("Thursday"));

    // Same name already present on the target day now
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            &format!("/api/workoutitems/{id}/duplicate"),
            &token,
            Some(json!({"targetDay": 4})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/workoutitems/999999/duplicate",
            &token,
            Some(json!({"targetDay": 2})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn foreign_duplicate_is_forbidden() {
    let app = spawn_app().await;
    let owner = signup(&app, "alice").await;
    let other = signup(&app, "bob").await;

    let created = create_item(&app, &owner, "Wall Sit", 6, 1).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let response = app
        .clone()
        .oneshot(request(
            "POST",
            &format!("/api/workoutitems/{id}/duplicate"),
            &other,
            Some(json!({"targetDay": 7})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn users_only_see_their_own_items() {
    let app = spawn_app().await;
    let alice = signup(&app, "alice").await;
    let bob = signup(&app, "bob").await;

    create_item(&app, &alice, "Squats", 1, 1).await;
    create_item(&app, &bob, "Plank", 1, 1).await;

    let response = app
        .clone()
        .oneshot(request("GET", "/api/workoutitems", &alice, None))
        .await
        .unwrap();
    let body = body_json(response).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Squats");
}
