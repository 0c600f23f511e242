use crate::entities::prelude::*;
use crate::entities::random_exercises;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// The 10 bodyweight exercises offered by the suggestion endpoint.
const SEED_EXERCISES: [&str; 10] = [
    "Push-ups",
    "Squats",
    "Jumping Jacks",
    "Plank",
    "Burpees",
    "Lunges",
    "Mountain Climbers",
    "High Knees",
    "Bicycle Crunches",
    "Wall Sit",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(RandomExercises)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        for name in SEED_EXERCISES {
            let insert = sea_orm_migration::sea_query::Query::insert()
                .into_table(RandomExercises)
                .columns([random_exercises::Column::Name])
                .values_panic([name.into()])
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RandomExercises).to_owned())
            .await?;

        Ok(())
    }
}
