use std::io;
use std::path::{Path, PathBuf};

use crate::domain::StagedFileName;

#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    async fn persist(
        &self,
        name: &StagedFileName,
        data: &[u8],
    ) -> Result<StagedUpload, UploadStoreError>;
}

/// Exclusive handle on a staged upload. The file is removed when the handle drops,
/// which covers early returns, unwinding and cancelled request futures alike.
#[derive(Debug)]
pub struct StagedUpload {
    path: PathBuf,
}

impl StagedUpload {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> Result<Vec<u8>, UploadStoreError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(UploadStoreError::Io)
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "Staged upload removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload")
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("path escapes upload directory: {0}")]
    PathEscape(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
