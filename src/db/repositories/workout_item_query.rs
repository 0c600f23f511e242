use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::entities::{prelude::*, workout_items};
use crate::models::Weekday;

use super::workout_item::{WorkoutItem, map_item};

/// Read-only queries over workout items.
pub struct WorkoutItemQueryRepository {
    conn: DatabaseConnection,
}

impl WorkoutItemQueryRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All items for a user, ordered by day then sort order.
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<WorkoutItem>> {
        let rows = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .order_by_asc(workout_items::Column::DayOfWeek)
            .order_by_asc(workout_items::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list workout items by user")?;

        rows.into_iter().map(map_item).collect()
    }

    /// Items for a single day, ordered by sort order.
    pub async fn list_by_user_and_day(
        &self,
        user_id: i32,
        day_of_week: Weekday,
    ) -> Result<Vec<WorkoutItem>> {
        let rows = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .filter(workout_items::Column::DayOfWeek.eq(day_of_week.as_i32()))
            .order_by_asc(workout_items::Column::SortOrder)
            .all(&self.conn)
            .await
            .context("Failed to list workout items by user and day")?;

        rows.into_iter().map(map_item).collect()
    }

    /// All items for a user with the full display ordering
    /// (day, then sort order, then name as tiebreak).
    pub async fn list_by_user_ordered(&self, user_id: i32) -> Result<Vec<WorkoutItem>> {
        let rows = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .order_by_asc(workout_items::Column::DayOfWeek)
            .order_by_asc(workout_items::Column::SortOrder)
            .order_by_asc(workout_items::Column::Name)
            .all(&self.conn)
            .await
            .context("Failed to list ordered workout items")?;

        rows.into_iter().map(map_item).collect()
    }

    /// Whether the user already has an item with this name on the given day.
    /// `exclude_id` skips one row, for update scenarios.
    pub async fn exists_by_name(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        exclude_id: Option<i32>,
    ) -> Result<bool> {
        let mut query = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .filter(workout_items::Column::Name.eq(name))
            .filter(workout_items::Column::DayOfWeek.eq(day_of_week.as_i32()));

        if let Some(id) = exclude_id {
            query = query.filter(workout_items::Column::Id.ne(id));
        }

        let count = query
            .count(&self.conn)
            .await
            .context("Failed to check workout item name existence")?;

        Ok(count > 0)
    }
}
