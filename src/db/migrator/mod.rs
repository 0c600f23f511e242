use sea_orm_migration::prelude::*;

mod m20250814_add_users;
mod m20250814_add_workout_items;
mod m20250816_add_random_exercises;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250814_add_users::Migration),
            Box::new(m20250814_add_workout_items::Migration),
            Box::new(m20250816_add_random_exercises::Migration),
        ]
    }
}
