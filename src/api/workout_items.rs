use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, auth::CurrentUser};
use crate::models::Weekday;
use crate::services::{WeeklySchedule, WorkoutItemDto};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutItemRequest {
    pub name: String,
    pub day_of_week: i32,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutItemRequest {
    pub name: String,
    pub day_of_week: i32,
    pub sort_order: i32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub day_of_week: i32,
    pub item_sort_orders: HashMap<i32, i32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRequest {
    pub target_day: i32,
}

// Weekdays arrive as raw integers so an out-of-range day surfaces as a 400
// with a readable message instead of a deserialization failure.
fn parse_day(value: i32) -> Result<Weekday, ApiError> {
    Weekday::try_from(value).map_err(|e| ApiError::validation(e.to_string()))
}

fn validate_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Workout item name is required"));
    }
    if name.len() > 200 {
        return Err(ApiError::validation(
            "Workout item name must be at most 200 characters",
        ));
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/workoutitems
pub async fn create_workout_item(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<CreateWorkoutItemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkoutItemDto>>), ApiError> {
    validate_name(&payload.name)?;
    let day = parse_day(payload.day_of_week)?;
    if payload.sort_order < 0 {
        return Err(ApiError::validation("Sort order must be non-negative"));
    }

    let item = state
        .workout_items()
        .create(current.id, payload.name.trim(), day, payload.sort_order)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            item,
            "Workout item created",
        )),
    ))
}

/// GET /api/workoutitems/{id}
pub async fn get_workout_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<WorkoutItemDto>>, ApiError> {
    let item = state.workout_items().get_by_id(id).await?;
    Ok(Json(ApiResponse::success(item)))
}

/// GET /api/workoutitems
pub async fn list_workout_items(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<Vec<WorkoutItemDto>>>, ApiError> {
    let items = state.workout_queries().list_by_user(current.id).await?;
    Ok(Json(ApiResponse::success(items)))
}

/// GET /api/workoutitems/day/{dayOfWeek}
pub async fn list_workout_items_for_day(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(day_of_week): Path<i32>,
) -> Result<Json<ApiResponse<Vec<WorkoutItemDto>>>, ApiError> {
    let day = parse_day(day_of_week)?;
    let items = state
        .workout_queries()
        .list_by_user_and_day(current.id, day)
        .await?;
    Ok(Json(ApiResponse::success(items)))
}

/// GET /api/workoutitems/grouped
pub async fn grouped_workout_items(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
) -> Result<Json<ApiResponse<WeeklySchedule>>, ApiError> {
    let schedule = state.workout_queries().grouped_by_day(current.id).await?;
    Ok(Json(ApiResponse::success(schedule)))
}

/// PUT /api/workoutitems/{id}
pub async fn update_workout_item(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWorkoutItemRequest>,
) -> Result<Json<ApiResponse<WorkoutItemDto>>, ApiError> {
    validate_name(&payload.name)?;
    let day = parse_day(payload.day_of_week)?;
    if payload.sort_order < 0 {
        return Err(ApiError::validation("Sort order must be non-negative"));
    }

    let item = state
        .workout_items()
        .update(id, current.id, payload.name.trim(), day, payload.sort_order)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        item,
        "Workout item updated",
    )))
}

/// DELETE /api/workoutitems/{id}
pub async fn delete_workout_item(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.workout_items().delete(id, current.id).await?;
    Ok(Json(ApiResponse::success_with_message(
        (),
        "Workout item deleted",
    )))
}

/// PUT /api/workoutitems/reorder
pub async fn reorder_workout_items(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let day = parse_day(payload.day_of_week)?;

    state
        .workout_management()
        .reorder(current.id, day, &payload.item_sort_orders)
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        (),
        "Workout items reordered",
    )))
}

/// POST /api/workoutitems/{id}/duplicate
pub async fn duplicate_workout_item(
    State(state): State<Arc<AppState>>,
    Extension(current): Extension<CurrentUser>,
    Path(id): Path<i32>,
    Json(payload): Json<DuplicateRequest>,
) -> Result<(StatusCode, Json<ApiResponse<WorkoutItemDto>>), ApiError> {
    let target_day = parse_day(payload.target_day)?;

    let item = state
        .workout_management()
        .duplicate(id, current.id, target_day)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            item,
            format!("Workout item duplicated to {target_day} successfully"),
        )),
    ))
}
