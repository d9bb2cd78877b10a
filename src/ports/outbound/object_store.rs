use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// File descriptor returned by a folder listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
}

impl StoredFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// ObjectStore port for the backend's file storage
///
/// The port is scoped to a single bucket; adapters are constructed with it.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Lists files directly under `prefix`, in the order the store returns them
    ///
    /// # Errors
    /// Returns an error if the listing request fails
    async fn list_files(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<StoredFile>>;

    /// Public URL of `prefix/file_name`. Never fails for a valid path.
    fn public_url(&self, prefix: &str, file_name: &str) -> String;

    /// Uploads an object and returns its path inside the bucket
    ///
    /// # Errors
    /// Returns an error if the object already exists or the upload fails
    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String>;
}

#[async_trait]
impl<T: ObjectStore + ?Sized> ObjectStore for Arc<T> {
    async fn list_files(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<StoredFile>> {
        (**self).list_files(prefix, limit).await
    }

    fn public_url(&self, prefix: &str, file_name: &str) -> String {
        (**self).public_url(prefix, file_name)
    }

    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        (**self).upload(path, content_type, bytes).await
    }
}
