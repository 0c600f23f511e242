pub use super::random_exercises::Entity as RandomExercises;
pub use super::users::Entity as Users;
pub use super::workout_items::Entity as WorkoutItems;
