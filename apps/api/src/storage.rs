//! Document storage: where uploaded résumé files are kept.
//!
//! Backed by any S3-compatible service (MinIO locally, AWS in production).

use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use crate::config::StorageConfig;
use crate::errors::AppError;

/// Location of a stored document.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub key: String,
    pub url: String,
}

#[async_trait]
pub trait DocumentStorage: Send + Sync {
    async fn upload(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<StoredDocument, AppError>;

    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

pub struct S3DocumentStorage {
    client: aws_sdk_s3::Client,
    bucket: String,
    public_url: String,
}

impl S3DocumentStorage {
    /// Constructs an S3 client configured for MinIO (local) or AWS (production).
    pub async fn connect(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "parakh-static",
        );

        let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&config.endpoint)
            .load()
            .await;

        // Path-style addressing keeps MinIO endpoints working.
        let client_config = aws_sdk_s3::config::Builder::from(&s3_config)
            .force_path_style(true)
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(client_config),
            bucket: config.bucket.clone(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl DocumentStorage for S3DocumentStorage {
    async fn upload(
        &self,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<StoredDocument, AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded document to s3://{}/{}", self.bucket, key);

        Ok(StoredDocument {
            key: key.to_string(),
            url: public_url(&self.public_url, key),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::Storage(format!("S3 delete failed: {e}")))?;

        info!("Deleted document s3://{}/{}", self.bucket, key);
        Ok(())
    }
}

fn public_url(base: &str, key: &str) -> String {
    format!("{}/{}", base, key.trim_start_matches('/'))
}
