use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::entities::{prelude::*, random_exercises};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: i32,
    pub name: String,
}

impl From<random_exercises::Model> for Exercise {
    fn from(model: random_exercises::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

/// Read-only access to the seeded exercise table.
pub struct RandomExerciseRepository {
    conn: DatabaseConnection,
}

impl RandomExerciseRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<Exercise>> {
        let rows = RandomExercises::find()
            .order_by_asc(random_exercises::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list random exercises")?;

        Ok(rows.into_iter().map(Exercise::from).collect())
    }
}
