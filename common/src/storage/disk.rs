use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs;

use super::Storage;
use crate::Error;

/// Storage backed by a directory tree, one file per record. Path segments
/// map to sub-directories, so `role/example` lands at `<base>/role/example`.
#[derive(Clone, Debug)]
pub struct OnDiskStorage {
    base: PathBuf,
}

impl OnDiskStorage {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    fn record_path(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }
}

#[async_trait]
impl Storage for OnDiskStorage {
    async fn get(&self, path: &str) -> Result<Option<Vec<u8>>, Error> {
        match fs::read(self.record_path(path)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::IO(e)),
        }
    }

    async fn put(&self, path: &str, bytes: &[u8]) -> Result<(), Error> {
        let record_path = self.record_path(path);

        if let Some(parent) = record_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(record_path, bytes).await?;

        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        match fs::remove_file(self.record_path(path)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::IO(e)),
        }
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, Error> {
        let mut dir = match fs::read_dir(self.record_path(prefix)).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::IO(e)),
        };

        let mut names = Vec::new();

        while let Some(dir_entry) = dir.next_entry().await? {
            names.push(dir_entry.file_name().to_string_lossy().into_owned());
        }

        names.sort();

        Ok(names)
    }
}
