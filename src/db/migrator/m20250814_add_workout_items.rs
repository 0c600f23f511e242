use crate::entities::prelude::*;
use crate::entities::workout_items;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(WorkoutItems)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Covers the per-user, per-day ordered listings
        manager
            .create_index(
                Index::create()
                    .name("idx_workout_items_user_day_sort")
                    .table(WorkoutItems)
                    .col(workout_items::Column::UserId)
                    .col(workout_items::Column::DayOfWeek)
                    .col(workout_items::Column::SortOrder)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutItems).to_owned())
            .await?;

        Ok(())
    }
}
