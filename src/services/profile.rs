//! Profile service

use crate::audit::EntityType;
use crate::error::{PlannerError, PlannerResult};
use crate::models::{Profile, UserId};
use crate::storage::Storage;

/// Optional field updates for a profile
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub website: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.website.is_none() && self.avatar_url.is_none()
    }
}

/// Service for profile management
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new profile with a unique username
    pub fn sign_up(&self, username: &str, full_name: &str) -> PlannerResult<Profile> {
        let mut profile = Profile::new(username.trim());
        profile.full_name = full_name.trim().to_string();
        profile.validate().map_err(PlannerError::Validation)?;

        if self.storage.profiles.find_by_username(username)?.is_some() {
            return Err(PlannerError::duplicate_username(username.trim()));
        }

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;
        self.storage
            .log_create(profile.id, EntityType::Profile, profile.id.to_string(), &profile)?;

        Ok(profile)
    }

    /// Get a profile by user id
    pub fn get(&self, user: UserId) -> PlannerResult<Profile> {
        self.storage
            .profiles
            .get(user)?
            .ok_or_else(|| PlannerError::profile_not_found(user.to_string()))
    }

    /// Look up a profile by username
    pub fn find_by_username(&self, username: &str) -> PlannerResult<Option<Profile>> {
        self.storage.profiles.find_by_username(username)
    }

    /// Apply field updates to a profile
    pub fn update(&self, user: UserId, update: ProfileUpdate) -> PlannerResult<Profile> {
        let mut profile = self.get(user)?;
        let before = profile.clone();

        if let Some(full_name) = update.full_name {
            profile.full_name = full_name.trim().to_string();
        }
        if let Some(website) = update.website {
            profile.website = website.trim().to_string();
        }
        if let Some(avatar_url) = update.avatar_url {
            profile.avatar_url = avatar_url.trim().to_string();
        }
        profile.touch();

        self.storage.profiles.upsert(profile.clone())?;
        self.storage.profiles.save()?;
        self.storage.log_update(
            user,
            EntityType::Profile,
            user.to_string(),
            &before,
            &profile,
            None,
        )?;

        Ok(profile)
    }
}
