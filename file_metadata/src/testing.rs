//! In-memory stand-ins for the table and storage clients.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{StorageError, TableError};
use crate::record::MetadataRecord;
use crate::storage::{BucketCreated, ObjectStore};
use crate::table::{MetadataTable, ScanPage};

#[derive(Default)]
pub struct MemoryTable {
    items: Mutex<BTreeMap<String, MetadataRecord>>,
    puts: Mutex<Vec<String>>,
    fail_put_for: Option<String>,
    fail_scan_with: Option<String>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_put_for(id: &str) -> Self {
        Self {
            fail_put_for: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_scan(message: &str) -> Self {
        Self {
            fail_scan_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<MetadataRecord> {
        self.items.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Ids of every successful put, in call order.
    pub fn puts(&self) -> Vec<String> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataTable for MemoryTable {
    async fn put_item(&self, record: &MetadataRecord) -> Result<(), TableError> {
        if self.fail_put_for.as_deref() == Some(record.id.as_str()) {
            return Err(TableError::Put {
                table: "memory".to_string(),
                id: record.id.clone(),
                message: "ProvisionedThroughputExceededException".to_string(),
            });
        }
        self.puts.lock().unwrap().push(record.id.clone());
        self.items
            .lock()
            .unwrap()
            .insert(record.id.clone(), record.clone());
        Ok(())
    }

    async fn scan(&self) -> Result<ScanPage, TableError> {
        if let Some(message) = &self.fail_scan_with {
            return Err(TableError::Scan {
                table: "memory".to_string(),
                message: message.clone(),
            });
        }
        Ok(ScanPage {
            records: self.items.lock().unwrap().values().cloned().collect(),
            truncated: false,
        })
    }
}

#[derive(Default)]
pub struct MemoryStore {
    buckets: Mutex<HashSet<String>>,
    objects: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn with_bucket(bucket: &str) -> Self {
        let store = Self::default();
        store.buckets.lock().unwrap().insert(bucket.to_string());
        store
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn create_bucket(
        &self,
        bucket: &str,
        region: &str,
    ) -> Result<BucketCreated, StorageError> {
        if !self.buckets.lock().unwrap().insert(bucket.to_string()) {
            return Err(StorageError::CreateBucket {
                bucket: bucket.to_string(),
                message: "BucketAlreadyOwnedByYou".to_string(),
            });
        }
        Ok(BucketCreated {
            location: Some(format!("/{bucket}@{region}")),
        })
    }

    async fn upload_file(&self, path: &Path, bucket: &str, key: &str) -> Result<(), StorageError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| StorageError::ReadFile {
                path: path.display().to_string(),
                message: err.to_string(),
            })?;
        if !self.buckets.lock().unwrap().contains(bucket) {
            return Err(StorageError::Upload {
                bucket: bucket.to_string(),
                key: key.to_string(),
                message: "NoSuchBucket".to_string(),
            });
        }
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), bytes);
        Ok(())
    }
}
