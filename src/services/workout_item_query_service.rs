//! Read-only queries over a user's workout schedule.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::WorkoutItem;
use crate::models::Weekday;
use crate::services::workout_item_service::{WorkoutItemDto, WorkoutItemError};

/// Lightweight item view used in the grouped weekly schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutItemSummaryDto {
    pub id: i32,
    pub name: String,
    pub day_of_week: Weekday,
    pub sort_order: i32,
}

impl From<WorkoutItem> for WorkoutItemSummaryDto {
    fn from(item: WorkoutItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            day_of_week: item.day_of_week,
            sort_order: item.sort_order,
        }
    }
}

/// A full week keyed 1 (Monday) through 7 (Sunday); every key is always
/// present, mapped to a possibly-empty ordered list.
pub type WeeklySchedule = BTreeMap<i32, Vec<WorkoutItemSummaryDto>>;

#[async_trait::async_trait]
pub trait WorkoutItemQueryService: Send + Sync {
    /// All items for the user, ordered by day then sort order.
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<WorkoutItemDto>, WorkoutItemError>;

    /// Items for one day, ordered by sort order.
    async fn list_by_user_and_day(
        &self,
        user_id: i32,
        day_of_week: Weekday,
    ) -> Result<Vec<WorkoutItemDto>, WorkoutItemError>;

    /// The user's items partitioned across all seven weekdays.
    async fn grouped_by_day(&self, user_id: i32) -> Result<WeeklySchedule, WorkoutItemError>;
}
