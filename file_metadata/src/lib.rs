//! Object metadata sync for a storage bucket.
//!
//! Two Lambda functions share a metadata table: [`store_metadata`] records
//! one row per storage-change notification and [`get_metadata`] returns the
//! whole table. [`provision`] and [`upload`] back the bucket setup scripts.

pub mod config;
pub mod error;
pub mod get_metadata;
pub mod provision;
pub mod record;
pub mod response;
pub mod storage;
pub mod store_metadata;
pub mod table;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{StorageError, TableError};
pub use record::{MetadataRecord, StorageEvent};
pub use response::FunctionResponse;
pub use storage::{ObjectStore, S3Store};
pub use table::{DynamoTable, MetadataTable};
