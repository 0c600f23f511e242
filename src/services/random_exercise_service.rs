//! Random exercise suggestions drawn from the seeded exercise table.

use serde::Serialize;
use thiserror::Error;

use crate::db::Exercise;

#[derive(Debug, Error)]
pub enum RandomExerciseError {
    #[error("No exercises found")]
    Empty,

    #[error("Count must be greater than zero")]
    InvalidCount,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for RandomExerciseError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDto {
    pub id: i32,
    pub name: String,
}

impl From<Exercise> for ExerciseDto {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name,
        }
    }
}

#[async_trait::async_trait]
pub trait RandomExerciseService: Send + Sync {
    /// The full table, in id order.
    async fn list_all(&self) -> Result<Vec<ExerciseDto>, RandomExerciseError>;

    /// One uniformly chosen exercise.
    async fn pick_one(&self) -> Result<ExerciseDto, RandomExerciseError>;

    /// Up to `count` distinct exercises via a uniform permutation; returns
    /// the whole table when `count` exceeds its size, never padded.
    async fn pick_many(&self, count: i32) -> Result<Vec<ExerciseDto>, RandomExerciseError>;
}
