//! Persistent tag cache.
//!
//! Tag records never change upstream, so once a tag ID has been
//! resolved it is kept on disk and never requested again.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::TwitchError;
use crate::api::Record;

/// Tag ID -> tag record mapping backed by a JSON file.
#[derive(Debug)]
pub struct TagCache {
    path: PathBuf,
    tags: BTreeMap<String, Record>,
}

impl TagCache {
    /// Load the cache file, creating an empty one if it does not exist.
    pub fn load_or_create(path: impl Into<PathBuf>) -> Result<Self, TwitchError> {
        let path = path.into();

        let tags = match std::fs::read_to_string(&path) {
            Ok(body) => {
                let tags: BTreeMap<String, Record> = serde_json::from_str(&body)?;
                tracing::info!(path = %path.display(), count = tags.len(), "Tag cache loaded");
                tags
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&path, "{}")?;
                tracing::info!(path = %path.display(), "Created empty tag cache");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, tags })
    }

    pub fn get(&self, tag_id: &str) -> Option<&Record> {
        self.tags.get(tag_id)
    }

    pub fn contains(&self, tag_id: &str) -> bool {
        self.tags.contains_key(tag_id)
    }

    /// Insert a record. Existing entries are overwritten.
    pub fn insert(&mut self, tag_id: String, record: Record) {
        self.tags.insert(tag_id, record);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the cache file with the full in-memory contents.
    pub async fn persist(&self) -> Result<(), TwitchError> {
        let body = serde_json::to_string_pretty(&self.tags)?;
        tokio::fs::write(&self.path, body).await?;
        tracing::debug!(path = %self.path.display(), count = self.tags.len(), "Tag cache flushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tags.json");

        let cache = TagCache::load_or_create(&path).unwrap();
        assert!(cache.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn existing_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, r#"{"t1": {"tag_id": "t1", "is_auto": false}}"#).unwrap();

        let cache = TagCache::load_or_create(&path).unwrap();
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("t1"));
        assert_eq!(cache.get("t1").unwrap()["is_auto"], json!(false));
        assert!(cache.get("t2").is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");
        std::fs::write(&path, "not json").unwrap();

        let err = TagCache::load_or_create(&path).unwrap_err();
        assert!(matches!(err, TwitchError::Json(_)));
    }

    #[tokio::test]
    async fn persist_overwrites_with_full_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags.json");

        let mut cache = TagCache::load_or_create(&path).unwrap();
        cache.insert("a".into(), json!({"tag_id": "a"}));
        cache.insert("b".into(), json!({"tag_id": "b"}));
        cache.persist().await.unwrap();

        let reloaded = TagCache::load_or_create(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get("b"), Some(&json!({"tag_id": "b"})));
    }
}
