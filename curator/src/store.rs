//! Flat-file persistence for follower records.
//!
//! The whole store is one JSON array. Loads read it fully, saves rewrite it
//! fully; there is no partial-write protection, so a crash mid-save can
//! truncate the file. Callers that mutate must hold the state's write lock
//! around the load-mutate-save cycle.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::AppError, model::FollowerRecord};

pub struct FollowerStore {
    path: PathBuf,
}

impl FollowerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// An absent file is an empty store, so a first run needs no setup.
    pub fn load(&self) -> Result<Vec<FollowerRecord>, AppError> {
        if !self.path.exists() {
            debug!("No store at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Overwrites the file with pretty-printed JSON, creating the parent
    /// directory on first save.
    pub fn save(&self, records: &[FollowerRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, serde_json::to_string_pretty(records)?)?;
        debug!("Saved {} followers to {}", records.len(), self.path.display());
        Ok(())
    }
}

/// Annotates the first record matching `username`. An unknown username is a
/// no-op and the function reports it through the return value only.
pub fn update_follower(
    records: &mut [FollowerRecord],
    username: &str,
    location: String,
    tags: Vec<String>,
    notes: String,
) -> bool {
    for record in records.iter_mut() {
        if record.username == username {
            record.annotate(location, tags, notes);
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{FollowerStore, update_follower};
    use crate::model::FollowerRecord;

    #[test]
    fn test_missing_store_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FollowerStore::new(dir.path().join("followers.json"));

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directory_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FollowerStore::new(dir.path().join("data").join("followers.json"));

        let records = vec![FollowerRecord::new("alice", Some("http://x".to_string()))];
        store.save(&records).unwrap();

        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_writes_pretty_json() {
        let dir = TempDir::new().unwrap();
        let store = FollowerStore::new(dir.path().join("followers.json"));

        store
            .save(&[FollowerRecord::new("alice", None)])
            .unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains('\n'));
        assert!(raw.contains("\"username\": \"alice\""));
    }

    #[test]
    fn test_update_annotates_first_match_only() {
        let mut records = vec![
            FollowerRecord::new("alice", None),
            FollowerRecord::new("bob", None),
        ];

        let matched = update_follower(
            &mut records,
            "bob",
            "Osaka".to_string(),
            vec!["vip".to_string()],
            "met at conf".to_string(),
        );

        assert!(matched);
        assert_eq!(records[0], FollowerRecord::new("alice", None));
        assert_eq!(records[1].location, "Osaka");
        assert_eq!(records[1].tags, vec!["vip".to_string()]);
        assert_eq!(records[1].notes, "met at conf");
    }

    #[test]
    fn test_update_unknown_username_is_a_noop() {
        let mut records = vec![FollowerRecord::new("alice", None)];
        let before = records.clone();

        let matched = update_follower(
            &mut records,
            "mallory",
            "Nowhere".to_string(),
            Vec::new(),
            String::new(),
        );

        assert!(!matched);
        assert_eq!(records, before);
    }
}
