use std::sync::Arc;

use bytes::Bytes;

use crate::application::ports::{StagedUpload, UploadStore, UploadStoreError};
use crate::domain::{AudioBlob, AudioOrigin, ContainerHint, StagedFileName};

/// The `audio` file part of an upload form, as received.
#[derive(Debug, Clone)]
pub struct UploadedAudio {
    pub filename: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("No audio file provided (expected multipart field 'audio')")]
    MissingField,
    #[error("No file selected")]
    EmptyFilename,
    #[error("File type not allowed. Allowed: {allowed}")]
    UnsupportedExtension { allowed: String },
    #[error("No audio data provided")]
    EmptyPayload,
    #[error("Invalid request payload: {0}")]
    MalformedRequest(String),
    #[error("Payload too large")]
    PayloadTooLarge,
    #[error("Failed to stage upload: {0}")]
    Storage(#[from] UploadStoreError),
}

/// An upload persisted to the staging directory. Dropping it removes the file.
#[derive(Debug)]
pub struct StagedAudio {
    upload: StagedUpload,
    container: ContainerHint,
}

impl StagedAudio {
    pub async fn load(&self) -> Result<AudioBlob, IngestError> {
        let data = self.upload.read().await?;
        AudioBlob::new(data, Some(self.container), AudioOrigin::UploadedFile)
            .ok_or(IngestError::EmptyPayload)
    }
}

pub struct AudioIngest {
    store: Arc<dyn UploadStore>,
}

impl AudioIngest {
    pub fn new(store: Arc<dyn UploadStore>) -> Self {
        Self { store }
    }

    /// Checks the upload's shape without touching storage.
    pub fn validate_upload(upload: Option<&UploadedAudio>) -> Result<ContainerHint, IngestError> {
        let upload = upload.ok_or(IngestError::MissingField)?;

        let filename = upload
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(IngestError::EmptyFilename)?;

        let container =
            ContainerHint::from_filename(filename).ok_or_else(|| IngestError::UnsupportedExtension {
                allowed: ContainerHint::allowed_extensions(),
            })?;

        if upload.data.is_empty() {
            return Err(IngestError::EmptyPayload);
        }

        Ok(container)
    }

    #[tracing::instrument(skip(self, upload))]
    pub async fn stage_upload(
        &self,
        upload: Option<UploadedAudio>,
    ) -> Result<StagedAudio, IngestError> {
        let container = Self::validate_upload(upload.as_ref())?;
        let Some(upload) = upload else {
            return Err(IngestError::MissingField);
        };

        let client_name = upload.filename.as_deref().unwrap_or_default();
        let name = StagedFileName::new(client_name, container);
        let staged = self.store.persist(&name, &upload.data).await?;

        tracing::debug!(
            staged_name = %name,
            container = %container,
            bytes = upload.data.len(),
            "Upload staged"
        );

        Ok(StagedAudio {
            upload: staged,
            container,
        })
    }

    pub fn from_stream(&self, payload: Bytes) -> Result<AudioBlob, IngestError> {
        AudioBlob::new(payload, None, AudioOrigin::RawStream).ok_or(IngestError::EmptyPayload)
    }
}
