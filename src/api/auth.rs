use axum::{
    Extension, Json,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::services::{LoginResult, UserInfo};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub user_name: String,
    pub password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

// ============================================================================
// Middleware
// ============================================================================

/// Identity of the authenticated caller, inserted into request extensions by
/// [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: String,
}

/// Validates the `Authorization: Bearer <jwt>` header and makes the caller's
/// identity available to downstream handlers.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(&headers)
        .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

    let claims = state
        .tokens()
        .decode_access_token(token)
        .map_err(|_| ApiError::unauthorized("Invalid or expired token"))?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| ApiError::unauthorized("Invalid token subject"))?;

    request.extensions_mut().insert(CurrentUser {
        id: user_id,
        username: claims.name,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get("Authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    auth_str.strip_prefix("Bearer ").map(str::trim)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/auth/register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    let mut errors = Vec::new();
    if payload.user_name.len() < 3 || payload.user_name.len() > 100 {
        errors.push("Username must be 3-100 characters".to_string());
    }
    if payload.password.len() < 6 || payload.password.len() > 100 {
        errors.push("Password must be 6-100 characters".to_string());
    }
    if !errors.is_empty() {
        return Err(ApiError::ValidationDetails {
            message: "Invalid registration data".to_string(),
            errors,
        });
    }

    let user = state
        .auth_service()
        .register(&payload.user_name, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        user,
        "Registration successful",
    )))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResult>>, ApiError> {
    if payload.user_name.is_empty() {
        return Err(ApiError::validation("Username is required"));
    }
    if payload.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }

    let result = state
        .auth_service()
        .login(&payload.user_name, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        result,
        "Login successful",
    )))
}

/// GET /api/auth/me (requires authentication)
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<UserInfo>>, ApiError> {
    let user = state.auth_service().current_user(current.id).await?;
    Ok(Json(ApiResponse::success(user)))
}
