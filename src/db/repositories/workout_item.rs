use anyhow::{Context, Result, anyhow};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::entities::{prelude::*, workout_items};
use crate::models::Weekday;

/// A scheduled workout item, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutItem {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub day_of_week: Weekday,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: Option<String>,
}

pub(crate) fn map_item(model: workout_items::Model) -> Result<WorkoutItem> {
    let day_of_week = Weekday::try_from(model.day_of_week)
        .map_err(|e| anyhow!("Corrupt workout item {}: {e}", model.id))?;

    Ok(WorkoutItem {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        day_of_week,
        sort_order: model.sort_order,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

/// Basic create/read/update/delete operations on workout items.
///
/// Ownership checks live in the service layer; this repository only touches rows.
pub struct WorkoutItemRepository {
    conn: DatabaseConnection,
}

impl WorkoutItemRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItem> {
        let now = chrono::Utc::now().to_rfc3339();

        let active = workout_items::ActiveModel {
            user_id: Set(user_id),
            name: Set(name.to_string()),
            day_of_week: Set(day_of_week.as_i32()),
            sort_order: Set(sort_order),
            created_at: Set(now),
            updated_at: Set(None),
            ..Default::default()
        };

        let model = active
            .insert(&self.conn)
            .await
            .context("Failed to insert workout item")?;

        map_item(model)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<WorkoutItem>> {
        let model = WorkoutItems::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query workout item by ID")?;

        model.map(map_item).transpose()
    }

    /// Overwrites name, day and sort order, stamping `updated_at`.
    /// Returns `None` if the row no longer exists.
    pub async fn update(
        &self,
        id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<Option<WorkoutItem>> {
        let Some(model) = WorkoutItems::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query workout item for update")?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().to_rfc3339();

        let mut active: workout_items::ActiveModel = model.into();
        active.name = Set(name.to_string());
        active.day_of_week = Set(day_of_week.as_i32());
        active.sort_order = Set(sort_order);
        active.updated_at = Set(Some(now));

        let updated = active
            .update(&self.conn)
            .await
            .context("Failed to update workout item")?;

        map_item(updated).map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = WorkoutItems::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete workout item")?;

        Ok(result.rows_affected > 0)
    }
}
