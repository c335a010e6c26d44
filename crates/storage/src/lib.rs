//! Object storage for clothing item images.
//!
//! The [`ObjectStore`] trait abstracts the S3-compatible bucket the app
//! stores images in. [`S3Store`] is the production implementation;
//! [`MemoryStore`] backs integration tests and local development without a
//! bucket. Uploads go through [`compress::compress_image`] first, so stored
//! objects are (almost always) bounded JPEGs.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use uuid::Uuid;

pub mod compress;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures from the image pipeline and object storage.
///
/// Compression and upload failures are distinct from persistence failures so
/// callers can decide whether to retry the upload alone or abandon the whole
/// operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Image compression failed: {0}")]
    Compression(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("Delete failed: {0}")]
    Delete(String),
}

// ---------------------------------------------------------------------------
// Keys and URLs
// ---------------------------------------------------------------------------

/// Generate a fresh object key for a user's image upload.
///
/// Keys are namespaced by owner; compressed uploads are always JPEG.
pub fn object_key(user_id: i64) -> String {
    format!("{user_id}/{}.jpg", Uuid::new_v4())
}

/// Derive the object key from a public URL under `public_base_url`.
///
/// Returns `None` for URLs outside the store's public base, in which case
/// deletion is skipped rather than attempted against a foreign path.
pub fn object_key_from_url<'a>(public_url: &'a str, public_base_url: &str) -> Option<&'a str> {
    let base = public_base_url.trim_end_matches('/');
    public_url
        .strip_prefix(base)?
        .strip_prefix('/')
        .filter(|key| !key.is_empty())
}

// ---------------------------------------------------------------------------
// Store trait
// ---------------------------------------------------------------------------

/// An object store that serves uploads back over public URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `key` and return the publicly resolvable URL.
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError>;

    /// Delete the object behind a previously returned public URL.
    ///
    /// URLs that do not belong to this store are ignored.
    async fn delete(&self, public_url: &str) -> Result<(), StorageError>;
}

// ---------------------------------------------------------------------------
// S3 implementation
// ---------------------------------------------------------------------------

/// S3-compatible object store.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_base_url: String,
}

impl S3Store {
    /// Build a store from the ambient AWS configuration.
    ///
    /// | Env Var               | Required | Purpose                              |
    /// |-----------------------|----------|--------------------------------------|
    /// | `STORAGE_BUCKET`      | **yes**  | Bucket name                          |
    /// | `STORAGE_PUBLIC_URL`  | **yes**  | Public base URL objects resolve under|
    /// | `STORAGE_ENDPOINT`    | no       | Custom endpoint (S3-compatible hosts)|
    ///
    /// # Panics
    ///
    /// Panics if a required variable is missing; storage misconfiguration
    /// should fail at startup, not on the first upload.
    pub async fn from_env() -> Self {
        let bucket =
            std::env::var("STORAGE_BUCKET").expect("STORAGE_BUCKET must be set in the environment");
        let public_base_url = std::env::var("STORAGE_PUBLIC_URL")
            .expect("STORAGE_PUBLIC_URL must be set in the environment");

        let base_config = aws_config::load_from_env().await;
        let mut s3_config = aws_sdk_s3::config::Builder::from(&base_config);
        if let Ok(endpoint) = std::env::var("STORAGE_ENDPOINT") {
            s3_config = s3_config.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config.build()),
            bucket,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{key}", self.public_base_url)
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Upload(e.to_string()))?;

        Ok(self.public_url(key))
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        let Some(key) = object_key_from_url(public_url, &self.public_base_url) else {
            tracing::debug!(url = %public_url, "Skipping delete of foreign object URL");
            return Ok(());
        };

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| StorageError::Delete(e.to_string()))?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory implementation
// ---------------------------------------------------------------------------

/// In-memory object store for tests and bucket-less local development.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<HashMap<String, StoredObject>>,
}

#[derive(Debug, Clone)]
struct StoredObject {
    bytes: Vec<u8>,
    content_type: String,
}

/// Base URL the in-memory store serves under.
const MEMORY_BASE_URL: &str = "memory://closetlog";

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects (test observability).
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size and content type of the object behind a URL, if stored.
    pub fn object_info(&self, public_url: &str) -> Option<(usize, String)> {
        let key = object_key_from_url(public_url, MEMORY_BASE_URL)?;
        self.objects
            .lock()
            .unwrap()
            .get(key)
            .map(|o| (o.bytes.len(), o.content_type.clone()))
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(format!("{MEMORY_BASE_URL}/{key}"))
    }

    async fn delete(&self, public_url: &str) -> Result<(), StorageError> {
        let Some(key) = object_key_from_url(public_url, MEMORY_BASE_URL) else {
            return Ok(());
        };
        self.objects.lock().unwrap().remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
