use lambda_runtime::{tracing, Error, LambdaEvent};

use crate::record::StorageEvent;
use crate::response::FunctionResponse;
use crate::table::MetadataTable;

pub const STORED_MESSAGE: &str = "Metadata stored successfully.";

/// Writes one record per notification, in batch order.
///
/// Stops at the first failing entry; records already written stay written.
async fn process_records<T: MetadataTable + ?Sized>(
    table: &T,
    event: &StorageEvent,
) -> Result<usize, Error> {
    for (index, entry) in event.records.iter().enumerate() {
        let record = entry.to_record(index)?;
        tracing::info!("Storing metadata for {} at {}", record.id, record.timestamp);
        table.put_item(&record).await?;
    }
    Ok(event.records.len())
}

pub async fn function_handler<T: MetadataTable + ?Sized>(
    event: LambdaEvent<StorageEvent>,
    table: &T,
) -> Result<FunctionResponse, Error> {
    let payload = event.payload;
    if payload.records.is_empty() {
        tracing::warn!("No records found in storage event");
    }
    let stored = process_records(table, &payload).await?;
    tracing::info!("Stored metadata for {} records", stored);
    Ok(FunctionResponse::json(200, STORED_MESSAGE)?)
}
