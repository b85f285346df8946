//! Local session management
//!
//! Account identity itself lives with an external provider; all this module
//! keeps is an opaque current-user marker on disk. Operations that need a
//! user treat an empty or dangling session as `Unauthenticated`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, PlannerResult};
use crate::models::UserId;
use crate::storage::{read_json, write_json_atomic, Storage};

/// The persisted session state
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in user, if any
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// Loads and saves the session file
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a session store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the current session; a missing file means signed out
    pub fn load(&self) -> PlannerResult<Session> {
        read_json(&self.path)
    }

    /// Sign a user in
    pub fn sign_in(&self, user_id: UserId) -> PlannerResult<()> {
        write_json_atomic(
            &self.path,
            &Session {
                user_id: Some(user_id),
            },
        )
    }

    /// Sign the current user out; signing out while signed out is a no-op
    pub fn sign_out(&self) -> PlannerResult<()> {
        write_json_atomic(&self.path, &Session::default())
    }

    /// Get the signed-in user id, if any
    pub fn current_user(&self) -> PlannerResult<Option<UserId>> {
        Ok(self.load()?.user_id)
    }

    /// Get the signed-in user id, requiring that it resolves to a real
    /// profile in the store
    pub fn require_user(&self, storage: &Storage) -> PlannerResult<UserId> {
        let user_id = self.current_user()?.ok_or(PlannerError::Unauthenticated)?;

        // A session pointing at a deleted profile is as good as no session
        if storage.profiles.get(user_id)?.is_none() {
            return Err(PlannerError::Unauthenticated);
        }

        Ok(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlannerPaths;
    use crate::models::Profile;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, SessionStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::new(temp_dir.path().join("session.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_means_signed_out() {
        let (_temp_dir, store) = test_store();
        assert!(store.current_user().unwrap().is_none());
    }

    #[test]
    fn test_sign_in_and_out() {
        let (_temp_dir, store) = test_store();
        let user = UserId::new();

        store.sign_in(user).unwrap();
        assert_eq!(store.current_user().unwrap(), Some(user));

        store.sign_out().unwrap();
        assert!(store.current_user().unwrap().is_none());

        // Signing out again is fine
        store.sign_out().unwrap();
    }

    #[test]
    fn test_require_user_fails_when_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let store = SessionStore::new(paths.session_file());

        let err = store.require_user(&storage).unwrap_err();
        assert!(matches!(err, PlannerError::Unauthenticated));
    }

    #[test]
    fn test_require_user_fails_for_dangling_session() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let store = SessionStore::new(paths.session_file());

        store.sign_in(UserId::new()).unwrap();
        let err = store.require_user(&storage).unwrap_err();
        assert!(matches!(err, PlannerError::Unauthenticated));
    }

    #[test]
    fn test_require_user_resolves_real_profile() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        let store = SessionStore::new(paths.session_file());

        let profile = Profile::new("amina");
        let id = profile.id;
        storage.profiles.upsert(profile).unwrap();

        store.sign_in(id).unwrap();
        assert_eq!(store.require_user(&storage).unwrap(), id);
    }
}
