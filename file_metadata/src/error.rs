//! Error types for table and storage operations.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

/// Renders a provider error as `<code>: <message>` when the response carried
/// both, otherwise as the full error chain.
///
/// Errors the SDK has no modelled type for display as `unhandled error`, so
/// the code and message come from the error metadata instead.
pub(crate) fn provider_message<E, R>(err: &SdkError<E, R>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: Debug,
{
    match err.as_service_error() {
        Some(service) => match (service.code(), service.message()) {
            (Some(code), Some(message)) => format!("{code}: {message}"),
            _ => service.to_string(),
        },
        None => DisplayErrorContext(err).to_string(),
    }
}

/// Errors raised by a [`MetadataTable`](crate::table::MetadataTable).
#[derive(Error, Debug)]
pub enum TableError {
    /// The provider rejected a put-item request.
    #[error("failed to put item {id} into {table}: {message}")]
    Put {
        table: String,
        id: String,
        message: String,
    },

    /// The provider rejected a scan request.
    #[error("{message}")]
    Scan { table: String, message: String },

    /// An item could not be converted to or from a record.
    #[error("failed to convert item: {0}")]
    Convert(#[from] serde_dynamo::Error),

    /// A notification entry is missing a field the writer needs.
    #[error("record {index} in event is missing {field}")]
    MalformedRecord { index: usize, field: &'static str },
}

/// Errors raised by an [`ObjectStore`](crate::storage::ObjectStore).
#[derive(Error, Debug)]
pub enum StorageError {
    /// Bucket creation was rejected.
    #[error("failed to create bucket {bucket}: {message}")]
    CreateBucket { bucket: String, message: String },

    /// The local file could not be opened or read.
    #[error("failed to read {path}: {message}")]
    ReadFile { path: String, message: String },

    /// The upload request was rejected.
    #[error("failed to upload {key} to {bucket}: {message}")]
    Upload {
        bucket: String,
        key: String,
        message: String,
    },
}
