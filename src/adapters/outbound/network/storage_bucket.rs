use super::backend_client::{encode_segment, BackendClient};
use crate::ports::outbound::{ObjectStore, StoredFile};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use std::future::Future;

/// Marker object the storage service creates for empty folders
const EMPTY_FOLDER_PLACEHOLDER: &str = ".emptyFolderPlaceholder";

/// Page size used when the caller does not limit the listing
const LIST_PAGE_SIZE: usize = 100;

#[derive(Debug, Deserialize)]
struct ListedObject {
    name: String,
}

/// StorageBucket adapter for one bucket of the backend's object storage
pub struct StorageBucket {
    client: BackendClient,
    bucket: String,
}

impl StorageBucket {
    /// # Errors
    /// Returns an error if the bucket name is not a valid path segment
    pub fn new(client: BackendClient, bucket: &str) -> Result<Self> {
        encode_segment(bucket, "Bucket name")?;
        Ok(Self {
            client,
            bucket: bucket.to_string(),
        })
    }

    /// Encodes a `/`-separated object path segment by segment
    fn encode_object_path(path: &str) -> Result<String> {
        path.split('/')
            .map(|segment| encode_segment(segment, "Object path segment"))
            .collect::<Result<Vec<_>>>()
            .map(|segments| segments.join("/"))
    }

    /// Lists one page of a folder, sorted by name
    async fn list_page(
        &self,
        prefix: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ListedObject>> {
        let path = format!(
            "/storage/v1/object/list/{}",
            urlencoding::encode(&self.bucket)
        );
        let request = self.client.request(Method::POST, &path)?.json(&json!({
            "prefix": prefix,
            "limit": limit,
            "offset": offset,
            "sortBy": { "column": "name", "order": "asc" },
        }));
        let response = self
            .client
            .send(&format!("list {}/{}", self.bucket, prefix), request)
            .await?;

        Ok(response.json::<Vec<ListedObject>>().await?)
    }
}

/// Reads pages of `page_size` entries until one comes back short
async fn collect_pages<F, Fut>(page_size: usize, mut fetch_page: F) -> Result<Vec<ListedObject>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<ListedObject>>>,
{
    let mut objects = Vec::new();
    loop {
        let page = fetch_page(objects.len()).await?;
        let exhausted = page.len() < page_size;
        objects.extend(page);
        if exhausted {
            return Ok(objects);
        }
    }
}

#[async_trait]
impl ObjectStore for StorageBucket {
    async fn list_files(&self, prefix: &str, limit: Option<usize>) -> Result<Vec<StoredFile>> {
        encode_segment(prefix, "Folder")?;

        let objects = match limit {
            // One extra entry so a placeholder never eats the requested slot
            Some(limit) => self.list_page(prefix, limit + 1, 0).await?,
            None => {
                let fetch_page = |offset| self.list_page(prefix, LIST_PAGE_SIZE, offset);
                collect_pages(LIST_PAGE_SIZE, fetch_page).await?
            }
        };

        let files = objects
            .into_iter()
            .filter(|object| object.name != EMPTY_FOLDER_PLACEHOLDER)
            .map(|object| StoredFile::new(object.name))
            .take(limit.unwrap_or(usize::MAX))
            .collect();

        Ok(files)
    }

    fn public_url(&self, prefix: &str, file_name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}/{}",
            self.client.base_url(),
            urlencoding::encode(&self.bucket),
            urlencoding::encode(prefix),
            urlencoding::encode(file_name)
        )
    }

    async fn upload(&self, path: &str, content_type: &str, bytes: Vec<u8>) -> Result<String> {
        let object_path = Self::encode_object_path(path)?;
        let url_path = format!(
            "/storage/v1/object/{}/{}",
            urlencoding::encode(&self.bucket),
            object_path
        );

        let request = self
            .client
            .request(Method::POST, &url_path)?
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes);
        self.client
            .send(&format!("upload {}/{}", self.bucket, path), request)
            .await?;

        Ok(path.to_string())
    }
}
