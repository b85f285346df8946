//! Profile repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::{Profile, UserId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ProfileTable {
    profiles: Vec<Profile>,
}

/// Repository for profile persistence
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, Profile>>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load profiles from disk
    pub fn load(&self) -> Result<(), PlannerError> {
        let table: ProfileTable = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        data.clear();
        for profile in table.profiles {
            data.insert(profile.id, profile);
        }

        Ok(())
    }

    /// Save profiles to disk
    pub fn save(&self) -> Result<(), PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        let mut profiles: Vec<_> = data.values().cloned().collect();
        profiles.sort_by(|a, b| a.username.cmp(&b.username));

        write_json_atomic(&self.path, &ProfileTable { profiles })
    }

    /// Get a profile by user id
    pub fn get(&self, id: UserId) -> Result<Option<Profile>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        Ok(data.get(&id).cloned())
    }

    /// Look up a profile by username (case-insensitive)
    pub fn find_by_username(&self, username: &str) -> Result<Option<Profile>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        let needle = username.trim().to_lowercase();
        Ok(data
            .values()
            .find(|p| p.username.to_lowercase() == needle)
            .cloned())
    }

    /// Insert or update a profile
    pub fn upsert(&self, profile: Profile) -> Result<(), PlannerError> {
        let mut data = self
            .data
            .write()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        data.insert(profile.id, profile);
        Ok(())
    }

    /// List all profiles, sorted by username
    pub fn list(&self) -> Result<Vec<Profile>, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        let mut profiles: Vec<_> = data.values().cloned().collect();
        profiles.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(profiles)
    }

    /// Count profiles
    pub fn count(&self) -> Result<usize, PlannerError> {
        let data = self
            .data
            .read()
            .map_err(|_| PlannerError::Storage("profile store lock poisoned".into()))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_repo() -> (TempDir, ProfileRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profiles.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = test_repo();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_find_by_username() {
        let (_temp_dir, repo) = test_repo();
        let profile = Profile::new("Amina");
        let id = profile.id;

        repo.upsert(profile).unwrap();

        let found = repo.find_by_username("amina").unwrap().unwrap();
        assert_eq!(found.id, id);
        assert!(repo.find_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = test_repo();
        let profile = Profile::new("kofi");
        let id = profile.id;

        repo.upsert(profile).unwrap();
        repo.save().unwrap();

        let repo2 = ProfileRepository::new(temp_dir.path().join("profiles.json"));
        repo2.load().unwrap();
        assert_eq!(repo2.get(id).unwrap().unwrap().username, "kofi");
    }
}
