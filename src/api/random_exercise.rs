use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::services::ExerciseDto;

/// GET /api/randomexercise
pub async fn list_exercises(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ExerciseDto>>>, ApiError> {
    let exercises = state.random_exercises().list_all().await?;
    Ok(Json(ApiResponse::success(exercises)))
}

/// GET /api/randomexercise/random
pub async fn random_exercise(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ExerciseDto>>, ApiError> {
    let exercise = state.random_exercises().pick_one().await?;
    Ok(Json(ApiResponse::success(exercise)))
}

/// GET /api/randomexercise/random/{count}
pub async fn random_exercises(
    State(state): State<Arc<AppState>>,
    Path(count): Path<i32>,
) -> Result<Json<ApiResponse<Vec<ExerciseDto>>>, ApiError> {
    let exercises = state.random_exercises().pick_many(count).await?;
    Ok(Json(ApiResponse::success(exercises)))
}
