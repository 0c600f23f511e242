use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::SharedState;

pub mod auth;
pub mod bmi;
mod error;
pub mod random_exercise;
mod types;
pub mod workout_items;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        self.shared.config.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn tokens(&self) -> &crate::services::TokenService {
        self.shared.tokens.as_ref()
    }

    #[must_use]
    pub fn auth_service(&self) -> &Arc<dyn crate::services::AuthService> {
        &self.shared.auth_service
    }

    #[must_use]
    pub fn workout_items(&self) -> &Arc<dyn crate::services::WorkoutItemService> {
        &self.shared.workout_item_service
    }

    #[must_use]
    pub fn workout_queries(&self) -> &Arc<dyn crate::services::WorkoutItemQueryService> {
        &self.shared.workout_item_query_service
    }

    #[must_use]
    pub fn workout_management(&self) -> &Arc<dyn crate::services::WorkoutItemManagementService> {
        &self.shared.workout_item_management_service
    }

    #[must_use]
    pub fn bmi(&self) -> &crate::services::BmiService {
        &self.shared.bmi_service
    }

    #[must_use]
    pub fn random_exercises(&self) -> &Arc<dyn crate::services::RandomExerciseService> {
        &self.shared.random_exercise_service
    }
}

pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config().server.cors_allowed_origins.clone();

    let protected_routes = create_protected_router(state.clone());

    let api_router = Router::new()
        .merge(protected_routes)
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/bmi/calculate", post(bmi::calculate_bmi))
        .route("/bmi/categories", get(bmi::list_bmi_categories))
        .route("/bmi/category/{bmiValue}", get(bmi::get_bmi_category))
        .route("/bmi/quick", get(bmi::quick_bmi))
        .route("/randomexercise", get(random_exercise::list_exercises))
        .route(
            "/randomexercise/random",
            get(random_exercise::random_exercise),
        )
        .route(
            "/randomexercise/random/{count}",
            get(random_exercise::random_exercises),
        )
        .with_state(state);

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

fn create_protected_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/me", get(auth::get_current_user))
        .route("/workoutitems", post(workout_items::create_workout_item))
        .route("/workoutitems", get(workout_items::list_workout_items))
        .route(
            "/workoutitems/grouped",
            get(workout_items::grouped_workout_items),
        )
        .route(
            "/workoutitems/reorder",
            put(workout_items::reorder_workout_items),
        )
        .route(
            "/workoutitems/day/{dayOfWeek}",
            get(workout_items::list_workout_items_for_day),
        )
        .route("/workoutitems/{id}", get(workout_items::get_workout_item))
        .route(
            "/workoutitems/{id}",
            put(workout_items::update_workout_item),
        )
        .route(
            "/workoutitems/{id}",
            delete(workout_items::delete_workout_item),
        )
        .route(
            "/workoutitems/{id}/duplicate",
            post(workout_items::duplicate_workout_item),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::auth_middleware))
}
