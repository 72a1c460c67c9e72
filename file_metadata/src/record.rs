use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// One row of the metadata table, keyed by object key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub id: String,
    pub filename: String,
    pub timestamp: String,
}

impl MetadataRecord {
    pub fn new(key: impl Into<String>, timestamp: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            filename: key,
            timestamp: timestamp.into(),
        }
    }
}

/// Storage-change notification batch as delivered by S3.
///
/// Only the fields the writer reads are modelled. `Records` itself is required;
/// the entry fields are optional so that a malformed entry fails when the writer reaches it rather than when the
/// payload is decoded, leaving earlier entries applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageEvent {
    #[serde(rename = "Records")]
    pub records: Vec<StorageEventRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageEventRecord {
    /// Kept as the raw string from the notification.
    pub event_time: Option<String>,
    pub s3: Option<StorageEntity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageEntity {
    pub object: Option<StorageObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageObject {
    pub key: Option<String>,
}

impl StorageEventRecord {
    pub fn new(key: impl Into<String>, event_time: impl Into<String>) -> Self {
        Self {
            event_time: Some(event_time.into()),
            s3: Some(StorageEntity {
                object: Some(StorageObject {
                    key: Some(key.into()),
                }),
            }),
        }
    }

    fn key(&self) -> Option<&str> {
        self.s3.as_ref()?.object.as_ref()?.key.as_deref()
    }

    /// Builds the metadata record for the entry at `index` in its batch.
    pub fn to_record(&self, index: usize) -> Result<MetadataRecord, TableError> {
        let key = self
            .key()
            .ok_or(TableError::MalformedRecord { index, field: "s3.object.key" })?;
        let timestamp = self
            .event_time
            .as_deref()
            .ok_or(TableError::MalformedRecord { index, field: "eventTime" })?;
        Ok(MetadataRecord::new(key, timestamp))
    }
}
