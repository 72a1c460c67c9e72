use lambda_runtime::tracing;

use crate::error::StorageError;
use crate::storage::{BucketCreated, ObjectStore};

/// Creates `bucket` in `region`. Creating a bucket that already exists fails.
pub async fn create_bucket<S: ObjectStore + ?Sized>(
    store: &S,
    bucket: &str,
    region: &str,
) -> Result<BucketCreated, StorageError> {
    tracing::info!("Creating bucket {} in {}", bucket, region);
    store.create_bucket(bucket, region).await
}

pub fn created_message(created: &BucketCreated) -> String {
    format!("Bucket created: {created:?}")
}
