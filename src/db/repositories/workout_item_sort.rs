use std::collections::HashMap;

use anyhow::{Context, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::entities::{prelude::*, workout_items};
use crate::models::Weekday;

/// Sort-order bookkeeping for workout items within a (user, day) partition.
pub struct WorkoutItemSortRepository {
    conn: DatabaseConnection,
}

impl WorkoutItemSortRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Next free sort order for the partition: current max + 1, or 1 when empty.
    pub async fn next_sort_order(&self, user_id: i32, day_of_week: Weekday) -> Result<i32> {
        let top = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .filter(workout_items::Column::DayOfWeek.eq(day_of_week.as_i32()))
            .order_by_desc(workout_items::Column::SortOrder)
            .one(&self.conn)
            .await
            .context("Failed to query max sort order")?;

        Ok(top.map_or(1, |item| item.sort_order + 1))
    }

    /// Applies the given id -> sort-order assignments in a single transaction,
    /// stamping `updated_at` on every touched row. Ids not present in the
    /// (user, day) partition are ignored; callers validate membership first.
    pub async fn update_sort_orders(
        &self,
        user_id: i32,
        day_of_week: Weekday,
        item_sort_orders: &HashMap<i32, i32>,
    ) -> Result<()> {
        if item_sort_orders.is_empty() {
            return Ok(());
        }

        let ids: Vec<i32> = item_sort_orders.keys().copied().collect();

        let txn = self
            .conn
            .begin()
            .await
            .context("Failed to open reorder transaction")?;

        let items = WorkoutItems::find()
            .filter(workout_items::Column::UserId.eq(user_id))
            .filter(workout_items::Column::DayOfWeek.eq(day_of_week.as_i32()))
            .filter(workout_items::Column::Id.is_in(ids))
            .all(&txn)
            .await
            .context("Failed to load workout items for reorder")?;

        let now = chrono::Utc::now().to_rfc3339();

        for item in items {
            let Some(&new_sort_order) = item_sort_orders.get(&item.id) else {
                continue;
            };

            let mut active: workout_items::ActiveModel = item.into();
            active.sort_order = Set(new_sort_order);
            active.updated_at = Set(Some(now.clone()));
            active
                .update(&txn)
                .await
                .context("Failed to update sort order")?;
        }

        txn.commit()
            .await
            .context("Failed to commit reorder transaction")?;

        Ok(())
    }
}
