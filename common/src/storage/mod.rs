//! The key-value storage boundary role entries are persisted through.
//!
//! Records are addressed by slash-separated paths such as `role/<name>`.
//! Implementations guarantee per-key read/write consistency only; callers
//! must not assume an atomic read-modify-write across calls, so a write is
//! always a blind overwrite.

mod disk;
mod memory;

pub use disk::OnDiskStorage;
pub use memory::InMemoryStorage;

use async_trait::async_trait;

use crate::Error;

#[async_trait]
pub trait Storage: Send + Sync {
    /// Returns the bytes stored at `path`, or `None` when absent.
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, Error>;

    /// Writes `bytes` at `path`, overwriting any existing record.
    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), Error>;

    /// Removes the record at `path`. Removing an absent path is not an
    /// error.
    async fn delete(&self, path: &str) -> Result<(), Error>;

    /// Lists the names stored directly under `prefix`, sorted, with the
    /// prefix stripped. An empty namespace lists as an empty vector.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, Error>;
}
