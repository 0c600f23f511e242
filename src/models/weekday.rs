use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, Monday=1 through Sunday=7.
///
/// Serialized as its integer value so clients and the database share one
/// representation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Weekday {
    type Error = InvalidWeekday;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            other => Err(InvalidWeekday(other)),
        }
    }
}

impl From<Weekday> for i32 {
    fn from(day: Weekday) -> Self {
        day as Self
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekday(pub i32);

impl fmt::Display for InvalidWeekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid day of week: {} (expected 1-7)", self.0)
    }
}

impl std::error::Error for InvalidWeekday {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_days() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::try_from(day.as_i32()).unwrap(), day);
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Weekday::try_from(0).is_err());
        assert!(Weekday::try_from(8).is_err());
        assert!(Weekday::try_from(-1).is_err());
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Weekday::Monday).unwrap(), "1");
        let day: Weekday = serde_json::from_str("7").unwrap();
        assert_eq!(day, Weekday::Sunday);
    }
}
