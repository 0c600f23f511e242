pub mod random_exercise;
pub mod user;
pub mod workout_item;
pub mod workout_item_query;
pub mod workout_item_sort;
