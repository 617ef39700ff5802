//! Authentication session: the token holder and its on-disk copy.

use crate::backend::routing::TokenSource;
use crate::backend::utils::paths::app_file;
use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tokio::fs;

/// Persisted session, written after login and removed on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFile {
    pub token: Option<String>,
}

impl SessionFile {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Gets the path to the session file.
    pub fn get_session_path() -> PathBuf {
        app_file("session.json")
    }

    pub async fn save(&self) -> Result<()> {
        self.save_to(&Self::get_session_path()).await
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;

        Ok(())
    }

    pub async fn load() -> Option<Self> {
        Self::load_from(&Self::get_session_path()).await
    }

    /// A missing or unreadable file means there is no session.
    pub async fn load_from(path: &Path) -> Option<Self> {
        let json = fs::read_to_string(path).await.ok()?;
        match serde_json::from_str(&json) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("Discarding unreadable session at {}: {e}", path.display());
                None
            }
        }
    }

    pub async fn delete() -> Result<()> {
        Self::delete_at(&Self::get_session_path()).await
    }

    pub async fn delete_at(path: &Path) -> Result<()> {
        if fs::try_exists(path).await? {
            fs::remove_file(path).await?;
        }
        Ok(())
    }
}

/// Process-wide token holder shared between the UI and background tasks.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionStore {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token)),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = Some(token.into());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.token.write() {
            *slot = None;
        }
    }
}

impl TokenSource for SessionStore {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }
}

impl From<SessionFile> for SessionStore {
    fn from(file: SessionFile) -> Self {
        Self::new(file.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn store_clones_share_one_token() {
        let store = SessionStore::default();
        let reader = store.clone();
        assert!(!reader.has_token());

        store.set_token("abc123");
        assert_eq!(reader.token().as_deref(), Some("abc123"));

        store.clear();
        assert!(!reader.has_token());
    }

    #[tokio::test]
    async fn session_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bwlp").join("session.json");

        SessionFile::new("abc123").save_to(&path).await.unwrap();
        let store = SessionStore::from(SessionFile::load_from(&path).await.unwrap());
        assert_eq!(store.token().as_deref(), Some("abc123"));

        SessionFile::delete_at(&path).await.unwrap();
        assert!(SessionFile::load_from(&path).await.is_none());
        SessionFile::delete_at(&path).await.unwrap();
    }

    #[tokio::test]
    async fn corrupt_session_is_treated_as_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").await.unwrap();

        assert!(SessionFile::load_from(&path).await.is_none());
    }
}
