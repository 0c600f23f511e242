//! Domain service for basic CRUD on workout items.

use serde::Serialize;
use thiserror::Error;

use crate::db::WorkoutItem;
use crate::models::Weekday;

/// Errors shared by the workout item CRUD, query and management services.
#[derive(Debug, Error)]
pub enum WorkoutItemError {
    #[error("Workout item not found")]
    NotFound,

    #[error("Not allowed to modify this workout item")]
    Forbidden,

    #[error("Workout item '{name}' already exists for {day}")]
    DuplicateName { name: String, day: Weekday },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for WorkoutItemError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Full workout item view returned by the CRUD endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutItemDto {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub day_of_week: Weekday,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<WorkoutItem> for WorkoutItemDto {
    fn from(item: WorkoutItem) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            name: item.name,
            day_of_week: item.day_of_week,
            sort_order: item.sort_order,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[async_trait::async_trait]
pub trait WorkoutItemService: Send + Sync {
    /// Creates an item owned by `user_id`.
    async fn create(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItemDto, WorkoutItemError>;

    /// Fetches an item by id. Performs no ownership check: any authenticated
    /// caller can read any item.
    async fn get_by_id(&self, id: i32) -> Result<WorkoutItemDto, WorkoutItemError>;

    /// Overwrites name, day and sort order.
    ///
    /// # Errors
    ///
    /// [`WorkoutItemError::NotFound`] if the item does not exist,
    /// [`WorkoutItemError::Forbidden`] if `user_id` is not the owner.
    async fn update(
        &self,
        id: i32,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItemDto, WorkoutItemError>;

    /// Physically removes the item, with the same checks as `update`.
    async fn delete(&self, id: i32, user_id: i32) -> Result<(), WorkoutItemError>;
}
