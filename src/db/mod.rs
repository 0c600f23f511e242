use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::info;

use crate::models::Weekday;

pub mod migrator;
pub mod repositories;

pub use repositories::random_exercise::Exercise;
pub use repositories::user::User;
pub use repositories::workout_item::WorkoutItem;

/// Facade over the relational store. Connects, runs migrations and exposes
/// one method per persistence operation; repositories stay internal.
#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn workout_item_repo(&self) -> repositories::workout_item::WorkoutItemRepository {
        repositories::workout_item::WorkoutItemRepository::new(self.conn.clone())
    }

    fn workout_item_query_repo(
        &self,
    ) -> repositories::workout_item_query::WorkoutItemQueryRepository {
        repositories::workout_item_query::WorkoutItemQueryRepository::new(self.conn.clone())
    }

    fn workout_item_sort_repo(&self) -> repositories::workout_item_sort::WorkoutItemSortRepository {
        repositories::workout_item_sort::WorkoutItemSortRepository::new(self.conn.clone())
    }

    fn random_exercise_repo(
        &self,
    ) -> repositories::random_exercise::RandomExerciseRepository {
        repositories::random_exercise::RandomExerciseRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<User> {
        self.user_repo().create(username, password_hash, role).await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().get_by_id(id).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.user_repo().get_by_username(username).await
    }

    pub async fn get_user_with_hash(&self, username: &str) -> Result<Option<(User, String)>> {
        self.user_repo().get_by_username_with_hash(username).await
    }

    pub async fn user_exists(&self, username: &str) -> Result<bool> {
        self.user_repo().exists_by_username(username).await
    }

    // ========================================================================
    // Workout items
    // ========================================================================

    pub async fn create_workout_item(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<WorkoutItem> {
        self.workout_item_repo()
            .create(user_id, name, day_of_week, sort_order)
            .await
    }

    pub async fn get_workout_item(&self, id: i32) -> Result<Option<WorkoutItem>> {
        self.workout_item_repo().get_by_id(id).await
    }

    pub async fn update_workout_item(
        &self,
        id: i32,
        name: &str,
        day_of_week: Weekday,
        sort_order: i32,
    ) -> Result<Option<WorkoutItem>> {
        self.workout_item_repo()
            .update(id, name, day_of_week, sort_order)
            .await
    }

    pub async fn delete_workout_item(&self, id: i32) -> Result<bool> {
        self.workout_item_repo().delete(id).await
    }

    pub async fn list_workout_items(&self, user_id: i32) -> Result<Vec<WorkoutItem>> {
        self.workout_item_query_repo().list_by_user(user_id).await
    }

    pub async fn list_workout_items_for_day(
        &self,
        user_id: i32,
        day_of_week: Weekday,
    ) -> Result<Vec<WorkoutItem>> {
        self.workout_item_query_repo()
            .list_by_user_and_day(user_id, day_of_week)
            .await
    }

    pub async fn list_workout_items_ordered(&self, user_id: i32) -> Result<Vec<WorkoutItem>> {
        self.workout_item_query_repo()
            .list_by_user_ordered(user_id)
            .await
    }

    pub async fn workout_item_name_exists(
        &self,
        user_id: i32,
        name: &str,
        day_of_week: Weekday,
        exclude_id: Option<i32>,
    ) -> Result<bool> {
        self.workout_item_query_repo()
            .exists_by_name(user_id, name, day_of_week, exclude_id)
            .await
    }

    pub async fn next_sort_order(&self, user_id: i32, day_of_week: Weekday) -> Result<i32> {
        self.workout_item_sort_repo()
            .next_sort_order(user_id, day_of_week)
            .await
    }

    pub async fn update_sort_orders(
        &self,
        user_id: i32,
        day_of_week: Weekday,
        item_sort_orders: &HashMap<i32, i32>,
    ) -> Result<()> {
        self.workout_item_sort_repo()
            .update_sort_orders(user_id, day_of_week, item_sort_orders)
            .await
    }

    // ========================================================================
    // Random exercises
    // ========================================================================

    pub async fn list_random_exercises(&self) -> Result<Vec<Exercise>> {
        self.random_exercise_repo().list_all().await
    }
}
