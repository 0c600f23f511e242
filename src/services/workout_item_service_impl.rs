//! `SeaORM` implementation of the `WorkoutItemService` trait.

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::Weekday;
use crate::services::workout_item_service::{
    WorkoutItemDto, WorkoutItemError, WorkoutItemService,
};

pub struct SeaOrmWorkoutItemService {
    store: Store,
}

impl SeaOrmWorkoutItemService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutItemService for SeaOrmWorkoutItemService {
    async fn create(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItemDto, WorkoutItemError> {
        let item = self
            .store
            .create_workout_item(user_id, name, day_of_week, sort_order)
            .await?;

        info!("User {user_id} created workout item {} ({name})", item.id);
        Ok(WorkoutItemDto::from(item))
    }

    async fn get_by_id(&self, id: i32) -> Result<WorkoutItemDto, WorkoutItemError> {
        let item = self
            .store
            .get_workout_item(id)
            .await?
            .ok_or(WorkoutItemError::NotFound)?;

        Ok(WorkoutItemDto::from(item))
    }

    async fn update(
        &self,
        id: i32,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItemDto, WorkoutItemError> {
        let existing = self
            .store
            .get_workout_item(id)
            .await?
            .ok_or(WorkoutItemError::NotFound)?;

        if existing.user_id != user_id {
            return Err(WorkoutItemError::Forbidden);
        }

        let updated = self
            .store
            .update_workout_item(id, name, day_of_week, sort_order)
            .await?
            .ok_or(WorkoutItemError::NotFound)?;

        Ok(WorkoutItemDto::from(updated))
    }

    async fn delete(&self, id: i32, user_id: i32) -> Result<(), WorkoutItemError> {
        let existing = self
            .store
            .get_workout_item(id)
            .await?
            .ok_or(WorkoutItemError::NotFound)?;

        if existing.user_id != user_id {
            return Err(WorkoutItemError::Forbidden);
        }

        if !self.store.delete_workout_item(id).await? {
            return Err(WorkoutItemError::NotFound);
        }

        info!("User {user_id} deleted workout item {id}");
        Ok(())
    }
}
