use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::services::{AuthError, BmiError, RandomExerciseError, WorkoutItemError};

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    ValidationError(String),

    /// Validation failure with one message per offending field.
    ValidationDetails {
        message: String,
        errors: Vec<String>,
    },

    /// Uniqueness violations. Surfaced as 400: no endpoint in this API
    /// exposes 409.
    Conflict(String),

    Unauthorized(String),

    Forbidden(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::ValidationDetails { message, .. } => write!(f, "Validation error: {message}"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            Self::Forbidden(msg) => write!(f, "Forbidden: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, ApiResponse::<()>::error(msg)),
            Self::ValidationError(msg) | Self::Conflict(msg) => {
                (StatusCode::BAD_REQUEST, ApiResponse::<()>::error(msg))
            }
            Self::ValidationDetails { message, errors } => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::error_with_details(message, errors),
            ),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, ApiResponse::<()>::error(msg)),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, ApiResponse::<()>::error(msg)),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponse::<()>::error("An internal error occurred"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameTaken => Self::Conflict(err.to_string()),
            AuthError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AuthError::UserNotFound => Self::NotFound(err.to_string()),
            AuthError::Validation(msg) => Self::ValidationError(msg),
            AuthError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<WorkoutItemError> for ApiError {
    fn from(err: WorkoutItemError) -> Self {
        match err {
            WorkoutItemError::NotFound => Self::NotFound(err.to_string()),
            WorkoutItemError::Forbidden => Self::Forbidden(err.to_string()),
            WorkoutItemError::DuplicateName { .. } => Self::Conflict(err.to_string()),
            WorkoutItemError::InvalidArgument(msg) => Self::ValidationError(msg),
            WorkoutItemError::Internal(msg) => Self::InternalError(msg),
        }
    }
}

impl From<BmiError> for ApiError {
    fn from(err: BmiError) -> Self {
        match err {
            BmiError::NonPositiveInput | BmiError::NoCategory(_) => {
                Self::ValidationError(err.to_string())
            }
        }
    }
}

impl From<RandomExerciseError> for ApiError {
    fn from(err: RandomExerciseError) -> Self {
        match err {
            RandomExerciseError::Empty => Self::NotFound(err.to_string()),
            RandomExerciseError::InvalidCount => Self::ValidationError(err.to_string()),
            RandomExerciseError::Internal(msg) => Self::InternalError(msg),
        }
    }
}
