pub mod weekday;

pub use weekday::Weekday;
