//! Thin file-transfer use cases over the object-store port.

use std::sync::Arc;

use bytes::Bytes;

use crate::application::errors::FileUseCaseError;
use crate::application::ports::ObjectStore;

/// Use case: store an uploaded file under `bucket/key`.
pub struct UploadFileUseCase {
    store: Arc<dyn ObjectStore>,
}

impl UploadFileUseCase {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn execute(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
    ) -> Result<(), FileUseCaseError> {
        self.store.put(bucket, key, body).await?;
        tracing::info!(bucket, key, "file uploaded");
        Ok(())
    }
}

/// Use case: fetch a stored file as bytes.
pub struct DownloadFileUseCase {
    store: Arc<dyn ObjectStore>,
}

impl DownloadFileUseCase {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, bucket: &str, key: &str) -> Result<Bytes, FileUseCaseError> {
        Ok(self.store.get(bucket, key).await?)
    }
}

/// Use case: delete a stored file.
pub struct DeleteFileUseCase {
    store: Arc<dyn ObjectStore>,
}

impl DeleteFileUseCase {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, bucket: &str, key: &str) -> Result<(), FileUseCaseError> {
        self.store.delete(bucket, key).await?;
        tracing::info!(bucket, key, "file deleted");
        Ok(())
    }
}
