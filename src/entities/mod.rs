pub mod prelude;

pub mod random_exercises;
pub mod users;
pub mod workout_items;
