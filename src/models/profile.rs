//! User profile model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier
    pub id: UserId,

    /// Unique sign-in name
    pub username: String,

    /// Full display name
    #[serde(default)]
    pub full_name: String,

    /// Personal website URL
    #[serde(default)]
    pub website: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: String,

    /// When the profile was created
    pub created_at: DateTime<Utc>,

    /// When the profile was last modified
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: username.into(),
            full_name: String::new(),
            website: String::new(),
            avatar_url: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Validate the profile fields
    pub fn validate(&self) -> Result<(), String> {
        let name = self.username.trim();
        if name.is_empty() {
            return Err("username must not be empty".to_string());
        }
        if name.len() > 30 {
            return Err(format!("username too long ({} > 30 chars)", name.len()));
        }
        if name.contains(char::is_whitespace) {
            return Err("username must not contain whitespace".to_string());
        }
        Ok(())
    }

    /// Mark the profile as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.full_name.is_empty() {
            write!(f, "{}", self.username)
        } else {
            write!(f, "{} ({})", self.username, self.full_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = Profile::new("amina");
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        let profile = Profile::new("  ");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_username_with_spaces_rejected() {
        let profile = Profile::new("amina k");
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_display_with_full_name() {
        let mut profile = Profile::new("amina");
        assert_eq!(profile.to_string(), "amina");
        profile.full_name = "Amina Kone".to_string();
        assert_eq!(profile.to_string(), "amina (Amina Kone)");
    }
}
