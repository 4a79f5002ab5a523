use super::CacheStore;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One JSON file per key under a directory
///
/// File names are the md5 digest of the key, so any key is a valid name.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
    cache_dir: PathBuf,
}

impl FileCacheStore {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let hash = format!("{:x}", md5::compute(key.as_bytes()));
        self.cache_dir.join(format!("{hash}.json"))
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        debug!("Reading cache entry {:?}", path);
        Ok(Some(std::fs::read_to_string(path)?))
    }

    fn put(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.cache_dir)?;
        let path = self.entry_path(key);
        debug!("Writing cache entry {:?}", path);
        std::fs::write(path, value)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.cache_dir.exists() {
            return Ok(());
        }

        for entry in std::fs::read_dir(&self.cache_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                std::fs::remove_file(path)?;
            }
        }

        Ok(())
    }
}
