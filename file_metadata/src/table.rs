//! Metadata table access.
//!
//! [`MetadataTable`] is the seam the two Lambda handlers are written against;
//! [`DynamoTable`] backs it with DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_runtime::tracing;
use serde_dynamo::aws_sdk_dynamodb_1::{from_items, to_item};

use crate::error::{provider_message, TableError};
use crate::record::MetadataRecord;

/// The first page of an unfiltered scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    pub records: Vec<MetadataRecord>,
    /// Set when the provider stopped early and more pages exist.
    pub truncated: bool,
}

#[async_trait]
pub trait MetadataTable: Send + Sync {
    /// Writes `record`, replacing any record with the same id.
    async fn put_item(&self, record: &MetadataRecord) -> Result<(), TableError>;

    /// Returns one page of every record in the table.
    async fn scan(&self) -> Result<ScanPage, TableError>;
}

pub struct DynamoTable {
    client: DynamoClient,
    table_name: String,
}

impl DynamoTable {
    pub fn new(client: DynamoClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl MetadataTable for DynamoTable {
    async fn put_item(&self, record: &MetadataRecord) -> Result<(), TableError> {
        let item = to_item(record)?;
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| TableError::Put {
                table: self.table_name.clone(),
                id: record.id.clone(),
                message: provider_message(&err),
            })?;
        Ok(())
    }

    async fn scan(&self) -> Result<ScanPage, TableError> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|err| TableError::Scan {
                table: self.table_name.clone(),
                message: provider_message(&err),
            })?;

        let truncated = output.last_evaluated_key().is_some();
        if truncated {
            tracing::warn!(
                "Scan of {} returned a partial page; remaining records are not read",
                self.table_name
            );
        }
        let records: Vec<MetadataRecord> = from_items(output.items.unwrap_or_default())?;
        Ok(ScanPage { records, truncated })
    }
}
