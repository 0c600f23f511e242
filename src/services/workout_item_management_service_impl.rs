//! `SeaORM` implementation of the `WorkoutItemManagementService` trait.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tracing::info;

use crate::db::Store;
use crate::models::Weekday;
use crate::services::workout_item_management_service::WorkoutItemManagementService;
use crate::services::workout_item_service::{WorkoutItemDto, WorkoutItemError};

pub struct SeaOrmWorkoutItemManagementService {
    store: Store,
}

impl SeaOrmWorkoutItemManagementService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutItemManagementService for SeaOrmWorkoutItemManagementService {
    async fn reorder(
        &self,
        user_id: i32,
        day_of_week: Weekday,
        item_sort_orders: &HashMap<i32, i32>,
    ) -> Result<(), WorkoutItemError> {
        if item_sort_orders.is_empty() {
            return Err(WorkoutItemError::InvalidArgument(
                "Sort orders cannot be empty".to_string(),
            ));
        }

        if item_sort_orders.values().any(|&order| order < 0) {
            return Err(WorkoutItemError::InvalidArgument(
                "Sort orders must be non-negative".to_string(),
            ));
        }

        // Strict membership check against the current (user, day) partition
        let existing = self
            .store
            .list_workout_items_for_day(user_id, day_of_week)
            .await?;
        let existing_ids: HashSet<i32> = existing.iter().map(|item| item.id).collect();

        let mut invalid_ids: Vec<i32> = item_sort_orders
            .keys()
            .copied()
            .filter(|id| !existing_ids.contains(id))
            .collect();

        if !invalid_ids.is_empty() {
            invalid_ids.sort_unstable();
            let listed = invalid_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(WorkoutItemError::InvalidArgument(format!(
                "Invalid workout item IDs: {listed}"
            )));
        }

        self.store
            .update_sort_orders(user_id, day_of_week, item_sort_orders)
            .await?;

        info!(
            "User {user_id} reordered {} items on {day_of_week}",
            item_sort_orders.len()
        );
        Ok(())
    }

    async fn duplicate(
        &self,
        id: i32,
        user_id: i32,
        target_day: Weekday,
    ) -> Result<WorkoutItemDto, WorkoutItemError> {
        let source = self
            .store
            .get_workout_item(id)
            .await?
            .ok_or(WorkoutItemError::NotFound)?;

        if source.user_id != user_id {
            return Err(WorkoutItemError::Forbidden);
        }

        let exists = self
            .store
            .workout_item_name_exists(user_id, &source.name, target_day, None)
            .await?;
        if exists {
            return Err(WorkoutItemError::DuplicateName {
                name: source.name,
                day: target_day,
            });
        }

        let sort_order = self.store.next_sort_order(user_id, target_day).await?;

        let duplicate = self
            .store
            .create_workout_item(user_id, &source.name, target_day, sort_order)
            .await?;

        info!(
            "User {user_id} duplicated workout item {id} to {target_day} as {}",
            duplicate.id
        );
        Ok(WorkoutItemDto::from(duplicate))
    }
}
