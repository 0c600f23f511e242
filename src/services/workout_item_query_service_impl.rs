//! `SeaORM` implementation of the `WorkoutItemQueryService` trait.

use async_trait::async_trait;

use crate::db::Store;
use crate::models::Weekday;
use crate::services::workout_item_query_service::{
    WeeklySchedule, WorkoutItemQueryService, WorkoutItemSummaryDto,
};
use crate::services::workout_item_service::{WorkoutItemDto, WorkoutItemError};

pub struct SeaOrmWorkoutItemQueryService {
    store: Store,
}

impl SeaOrmWorkoutItemQueryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WorkoutItemQueryService for SeaOrmWorkoutItemQueryService {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<WorkoutItemDto>, WorkoutItemError> {
        let items = self.store.list_workout_items(user_id).await?;
        Ok(items.into_iter().map(WorkoutItemDto::from).collect())
    }

    async fn list_by_user_and_day(
        &self,
        user_id: i32,
        day_of_week: Weekday,
    ) -> Result<Vec<WorkoutItemDto>, WorkoutItemError> {
        let items = self
            .store
            .list_workout_items_for_day(user_id, day_of_week)
            .await?;

        Ok(items.into_iter().map(WorkoutItemDto::from).collect())
    }

    async fn grouped_by_day(&self, user_id: i32) -> Result<WeeklySchedule, WorkoutItemError> {
        let items = self.store.list_workout_items_ordered(user_id).await?;

        // Seed all seven days so callers never special-case missing keys
        let mut schedule: WeeklySchedule = Weekday::ALL
            .into_iter()
            .map(|day| (day.as_i32(), Vec::new()))
            .collect();

        // Rows arrive ordered by day, sort order, then name; appending
        // preserves that order within each partition
        for item in items {
            let day = item.day_of_week.as_i32();
            schedule
                .entry(day)
                .or_default()
                .push(WorkoutItemSummaryDto::from(item));
        }

        Ok(schedule)
    }
}
