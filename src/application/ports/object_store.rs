use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Object not found: {bucket}/{key}")]
    NotFound { bucket: String, key: String },

    #[error("Object store error: {0}")]
    Backend(String),
}

/// Port for the object store: binary blobs addressed by bucket + key.
///
/// There is no `move` operation; moving is a use-case composition of `copy`
/// followed by `delete` so that a failed copy leaves the source in place.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, bucket: &str, key: &str, body: Bytes) -> Result<(), StoreError>;

    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, StoreError>;

    async fn delete(&self, bucket: &str, key: &str) -> Result<(), StoreError>;

    async fn copy(&self, bucket: &str, source_key: &str, dest_key: &str)
        -> Result<(), StoreError>;
}
