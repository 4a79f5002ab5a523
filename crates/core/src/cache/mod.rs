//! Storage of the resolved configuration between runs

mod file_store;
mod memory_store;

pub use file_store::FileCacheStore;
pub use memory_store::MemoryCacheStore;

use crate::error::Result;

/// Key/value store for serialized configuration
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Drop every entry; the next read resolves again
    fn clear(&self) -> Result<()>;
}
