pub mod password;
pub use password::{PasswordError, PasswordService};

pub mod token;
pub use token::{Claims, IssuedToken, TokenError, TokenService};

pub mod auth_service;
pub use auth_service::{AuthError, AuthService, LoginResult, UserInfo};

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod workout_item_service;
pub use workout_item_service::{WorkoutItemDto, WorkoutItemError, WorkoutItemService};

pub mod workout_item_service_impl;
pub use workout_item_service_impl::SeaOrmWorkoutItemService;

pub mod workout_item_query_service;
pub use workout_item_query_service::{
    WeeklySchedule, WorkoutItemQueryService, WorkoutItemSummaryDto,
};

pub mod workout_item_query_service_impl;
pub use workout_item_query_service_impl::SeaOrmWorkoutItemQueryService;

pub mod workout_item_management_service;
pub use workout_item_management_service::WorkoutItemManagementService;

pub mod workout_item_management_service_impl;
pub use workout_item_management_service_impl::SeaOrmWorkoutItemManagementService;

pub mod bmi;
pub use bmi::{BmiCalculation, BmiCategory, BmiError, BmiService};

pub mod random_exercise_service;
pub use random_exercise_service::{ExerciseDto, RandomExerciseError, RandomExerciseService};

pub mod random_exercise_service_impl;
pub use random_exercise_service_impl::SeaOrmRandomExerciseService;
