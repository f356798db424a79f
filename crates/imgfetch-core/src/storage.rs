//! Storage layer for fetched images

use crate::error::FetchError;
use std::path::PathBuf;
use tokio::fs;

/// Directory fetched images are written into
#[derive(Clone, Debug)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Open the store, creating the directory (and parents) if missing
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Path a file of this name would be written to
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }

    /// Write `bytes` under `filename`, replacing any existing file
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, FetchError> {
        let path = self.path_for(filename);
        fs::write(&path, bytes).await?;
        Ok(path)
    }
}
