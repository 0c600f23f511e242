//! Management operations on workout items: reordering within a day and
//! duplicating an item to another day.

use std::collections::HashMap;

use crate::models::Weekday;
use crate::services::workout_item_service::{WorkoutItemDto, WorkoutItemError};

#[async_trait::async_trait]
pub trait WorkoutItemManagementService: Send + Sync {
    /// Assigns new sort orders to the user's items on the given day.
    ///
    /// # Errors
    ///
    /// [`WorkoutItemError::InvalidArgument`] if the map is empty, any order
    /// is negative, or any id does not belong to the user's items on that
    /// day (the offending ids are listed in the message). Nothing is changed
    /// on failure.
    async fn reorder(
        &self,
        user_id: i32,
        day_of_week: Weekday,
        item_sort_orders: &HashMap<i32, i32>,
    ) -> Result<(), WorkoutItemError>;

    /// Copies an item to another day, appending it after that day's items.
    ///
    /// # Errors
    ///
    /// [`WorkoutItemError::NotFound`] for a missing source,
    /// [`WorkoutItemError::Forbidden`] for a foreign source,
    /// [`WorkoutItemError::DuplicateName`] if the target day already has an
    /// item with the same name.
    async fn duplicate(
        &self,
        id: i32,
        user_id: i32,
        target_day: Weekday,
    ) -> Result<WorkoutItemDto, WorkoutItemError>;
}
