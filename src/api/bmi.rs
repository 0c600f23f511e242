use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState};
use crate::services::{BmiCalculation, BmiCategory};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct CalculateBmiRequest {
    pub height: f64,
    pub weight: f64,
}

#[derive(Deserialize)]
pub struct QuickBmiParams {
    pub height: f64,
    pub weight: f64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/bmi/calculate
pub async fn calculate_bmi(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CalculateBmiRequest>,
) -> Result<Json<ApiResponse<BmiCalculation>>, ApiError> {
    let result = state.bmi().calculate(payload.height, payload.weight)?;

    let message = format!("BMI is {} - {}", result.bmi_value, result.category);
    Ok(Json(ApiResponse::success_with_message(result, message)))
}

/// GET /api/bmi/categories
pub async fn list_bmi_categories(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<&'static [BmiCategory]>> {
    Json(ApiResponse::success(state.bmi().categories()))
}

/// GET /api/bmi/category/{bmiValue}
pub async fn get_bmi_category(
    State(state): State<Arc<AppState>>,
    Path(bmi_value): Path<f64>,
) -> Result<Json<ApiResponse<&'static BmiCategory>>, ApiError> {
    if bmi_value <= 0.0 {
        return Err(ApiError::validation("BMI value must be greater than zero"));
    }

    let category = state.bmi().categorize(bmi_value)?;
    Ok(Json(ApiResponse::success(category)))
}

/// GET /api/bmi/quick?height=&weight=
pub async fn quick_bmi(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuickBmiParams>,
) -> Result<Json<ApiResponse<BmiCalculation>>, ApiError> {
    if !(0.5..=3.0).contains(&params.height) {
        return Err(ApiError::validation(
            "Height must be between 0.5 and 3.0 meters",
        ));
    }
    if !(10.0..=500.0).contains(&params.weight) {
        return Err(ApiError::validation(
            "Weight must be between 10 and 500 kilograms",
        ));
    }

    let result = state.bmi().calculate(params.height, params.weight)?;

    let message = format!("BMI is {} - {}", result.bmi_value, result.category);
    Ok(Json(ApiResponse::success_with_message(result, message)))
}
