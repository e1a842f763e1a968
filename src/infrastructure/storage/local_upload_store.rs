use std::path::{Component, Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::application::ports::{StagedUpload, UploadStore, UploadStoreError};
use crate::domain::StagedFileName;

/// Stages uploads as plain files directly inside `base_path`.
pub struct LocalUploadStore {
    base_path: PathBuf,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        let base_path = base_path.canonicalize().map_err(UploadStoreError::Io)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, name: &StagedFileName) -> Result<PathBuf, UploadStoreError> {
        let relative = Path::new(name.as_str());
        let mut components = relative.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.base_path.join(relative)),
            _ => Err(UploadStoreError::PathEscape(name.to_string())),
        }
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn persist(
        &self,
        name: &StagedFileName,
        data: &[u8],
    ) -> Result<StagedUpload, UploadStoreError> {
        let path = self.resolve(name)?;

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| UploadStoreError::WriteFailed(format!("{}: {}", name, e)))?;

        // Owns the file from here on, so a failed or cancelled write is cleaned up too
        let staged = StagedUpload::new(path);

        file.write_all(data)
            .await
            .map_err(|e| UploadStoreError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| UploadStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(path = %staged.path().display(), bytes = data.len(), "Upload written");

        Ok(staged)
    }
}
