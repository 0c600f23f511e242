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

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &Router, username: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(post_json(
            "/api/auth/register",
            json!({"userName": username, "password": password}),
        ))
        .await
        .unwrap()
}

async fn login(app: &Router, username: &str, password: &str) -> axum::response::Response {
    app.clone()
        .oneshot(post_json(
            "/api/auth/login",
            json!({"userName": username, "password": password}),
        ))
        .await
        .unwrap()
}

#[tokio::test]
async fn register_login_me_flow() {
    let app = spawn_app().await;

    let response = register(&app, "alice", "secret123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["userName"], "alice");
    assert_eq!(body["data"]["role"], "User");
    assert!(body["data"]["createdAt"].is_string());

    let response = login(&app, "alice", "secret123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();
    assert!(!token.is_empty());
    assert!(body["data"]["expiresAt"].is_string());
    assert_eq!(body["data"]["user"]["userName"], "alice");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["userName"], "alice");
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let app = spawn_app().await;

    let response = register(&app, "alice", "secret123").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = register(&app, "alice", "other-password").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username already exists");
}

#[tokio::test]
async fn register_enforces_field_bounds() {
    let app = spawn_app().await;

    let response = register(&app, "ab", "short").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;
    register(&app, "alice", "secret123").await;

    let wrong_password = login(&app, "alice", "not-the-password").await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password_body = body_json(wrong_password).await;

    let unknown_user = login(&app, "nobody", "secret123").await;
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);
    let unknown_user_body = body_json(unknown_user).await;

    assert_eq!(wrong_password_body["message"], unknown_user_body["message"]);
    assert_eq!(wrong_password_body["message"], "Invalid username or password");
}

#[tokio::test]
async fn me_requires_valid_token() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/auth/me")
                .header("Authorization", "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn bmi_calculate_rounds_and_categorizes() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/bmi/calculate",
            json!({"height": 1.70, "weight": 70.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["message"], "BMI is 24.22 - Normal");
    assert_eq!(body["data"]["bmiValue"], 24.22);
    assert_eq!(body["data"]["category"], "Normal");
    assert!(body["data"]["healthAdvice"].is_string());

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/bmi/calculate",
            json!({"height": 0.0, "weight": 70.0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bmi_categories_lists_all_seven() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let categories = body["data"].as_array().unwrap();
    assert_eq!(categories.len(), 7);
    assert_eq!(categories[2]["category"], "Normal");
    assert!(categories[6]["maxBmi"].is_null());
}

#[tokio::test]
async fn bmi_category_lookup_by_value() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/category/22.5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["category"], "Normal");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/category/0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bmi_quick_enforces_input_bounds() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/quick?height=1.70&weight=70")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["bmiValue"], 24.22);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/quick?height=0.3&weight=70")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/bmi/quick?height=1.70&weight=600")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn random_exercise_endpoints() {
    let app = spawn_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/randomexercise")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let all = body["data"].as_array().unwrap();
    assert_eq!(all.len(), 10);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/randomexercise/random")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["name"].is_string());

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/randomexercise/random/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    // More than the table holds: capped, never padded
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/randomexercise/random/100")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 10);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/randomexercise/random/0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
