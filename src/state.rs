use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    AuthService, BmiService, PasswordService, RandomExerciseService, SeaOrmAuthService,
    SeaOrmRandomExerciseService, SeaOrmWorkoutItemManagementService, SeaOrmWorkoutItemQueryService,
    SeaOrmWorkoutItemService, TokenService, WorkoutItemManagementService, WorkoutItemQueryService,
    WorkoutItemService,
};

/// Everything the handlers need, built once at startup.
#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub tokens: Arc<TokenService>,

    pub auth_service: Arc<dyn AuthService>,

    pub workout_item_service: Arc<dyn WorkoutItemService>,

    pub workout_item_query_service: Arc<dyn WorkoutItemQueryService>,

    pub workout_item_management_service: Arc<dyn WorkoutItemManagementService>,

    pub bmi_service: BmiService,

    pub random_exercise_service: Arc<dyn RandomExerciseService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let passwords = Arc::new(PasswordService::new(config.security.clone()));
        let tokens = Arc::new(TokenService::new(config.jwt.clone()));

        let auth_service = Arc::new(SeaOrmAuthService::new(
            store.clone(),
            passwords,
            tokens.clone(),
        )) as Arc<dyn AuthService>;

        let workout_item_service =
            Arc::new(SeaOrmWorkoutItemService::new(store.clone())) as Arc<dyn WorkoutItemService>;

        let workout_item_query_service = Arc::new(SeaOrmWorkoutItemQueryService::new(store.clone()))
            as Arc<dyn WorkoutItemQueryService>;

        let workout_item_management_service =
            Arc::new(SeaOrmWorkoutItemManagementService::new(store.clone()))
                as Arc<dyn WorkoutItemManagementService>;

        let random_exercise_service = Arc::new(SeaOrmRandomExerciseService::new(store.clone()))
            as Arc<dyn RandomExerciseService>;

        Ok(Self {
            config: Arc::new(config),
            store,
            tokens,
            auth_service,
            workout_item_service,
            workout_item_query_service,
            workout_item_management_service,
            bmi_service: BmiService::new(),
            random_exercise_service,
        })
    }
}
