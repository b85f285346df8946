//! Recurring study reminder model
//!
//! A reminder is a static recurring fact (course, weekday, time) with no
//! lifecycle beyond create and delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ReminderId;

/// Day of week for a recurring reminder
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Weekday; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
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
        write!(f, "{}", name)
    }
}

/// Error type for weekday parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayParseError(pub String);

impl fmt::Display for WeekdayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown weekday: {}", self.0)
    }
}

impl std::error::Error for WeekdayParseError {}

impl FromStr for Weekday {
    type Err = WeekdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            other => Err(WeekdayParseError(other.to_string())),
        }
    }
}

/// A recurring weekly study reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyReminder {
    /// Unique identifier
    pub id: ReminderId,

    /// Course name
    pub course: String,

    /// Day of the week the session recurs on
    pub weekday: Weekday,

    /// Time of day, free text (e.g. "7PM", "18:30")
    pub time: String,

    /// When the reminder was created
    pub created_at: DateTime<Utc>,
}

impl StudyReminder {
    /// Create a new reminder
    pub fn new(course: impl Into<String>, weekday: Weekday, time: impl Into<String>) -> Self {
        Self {
            id: ReminderId::new(),
            course: course.into(),
            weekday,
            time: time.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the reminder fields
    pub fn validate(&self) -> Result<(), String> {
        if self.course.trim().is_empty() {
            return Err("course must not be empty".to_string());
        }
        if self.time.trim().is_empty() {
            return Err("time must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_parse() {
        assert_eq!("Monday".parse::<Weekday>().unwrap(), Weekday::Monday);
        assert_eq!("fri".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("someday".parse::<Weekday>().is_err());
    }

    #[test]
    fn test_weekday_ordering_monday_first() {
        assert!(Weekday::Monday < Weekday::Sunday);
        assert!(Weekday::Wednesday < Weekday::Saturday);
    }

    #[test]
    fn test_reminder_validation() {
        let good = StudyReminder::new("Microeconomics", Weekday::Tuesday, "7PM");
        assert!(good.validate().is_ok());

        let no_course = StudyReminder::new("", Weekday::Tuesday, "7PM");
        assert!(no_course.validate().is_err());

        let no_time = StudyReminder::new("Microeconomics", Weekday::Tuesday, " ");
        assert!(no_time.validate().is_err());
    }

    #[test]
    fn test_reminder_serde_round_trip() {
        let reminder = StudyReminder::new("Statistics", Weekday::Thursday, "18:30");
        let json = serde_json::to_string(&reminder).unwrap();
        let back: StudyReminder = serde_json::from_str(&json).unwrap();
        assert_eq!(reminder, back);
    }
}
