//! Object storage access used by the provisioning and upload programs.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::tracing;

use crate::error::{provider_message, StorageError};

/// The region S3 treats as the default location; it must not be sent as a
/// location constraint.
pub const DEFAULT_REGION: &str = "us-east-1";

/// What the provider reported for a newly created bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketCreated {
    pub location: Option<String>,
}

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn create_bucket(&self, bucket: &str, region: &str)
        -> Result<BucketCreated, StorageError>;

    /// Uploads the bytes of the local file at `path` under `key`.
    async fn upload_file(&self, path: &Path, bucket: &str, key: &str)
        -> Result<(), StorageError>;
}

pub struct S3Store {
    client: S3Client,
}

impl S3Store {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn create_bucket(
        &self,
        bucket: &str,
        region: &str,
    ) -> Result<BucketCreated, StorageError> {
        let mut request = self.client.create_bucket().bucket(bucket);
        if region != DEFAULT_REGION {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(region))
                    .build(),
            );
        }

        let output = request.send().await.map_err(|err| StorageError::CreateBucket {
            bucket: bucket.to_string(),
            message: provider_message(&err),
        })?;
        Ok(BucketCreated {
            location: output.location().map(str::to_string),
        })
    }

    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<(), StorageError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|err| StorageError::ReadFile {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        tracing::debug!("Uploading {} to {}/{}", path.display(), bucket, key);

        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(body)
            .send()
            .await
            .map_err(|err| StorageError::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: provider_message(&err),
            })?;
        Ok(())
    }
}
