use lambda_runtime::{tracing, Error, LambdaEvent};
use serde_json::Value;

use crate::response::FunctionResponse;
use crate::table::MetadataTable;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderOptions {
    /// Adds `Access-Control-Allow-Origin: *` to successful responses.
    pub allow_any_origin: bool,
}

/// Returns every record from one scan of the table.
///
/// Scan failures become a 500 response carrying the error text; the
/// invocation itself only fails if a response body cannot be encoded.
pub async fn function_handler<T: MetadataTable + ?Sized>(
    _event: LambdaEvent<Value>,
    table: &T,
    options: ReaderOptions,
) -> Result<FunctionResponse, Error> {
    match table.scan().await {
        Ok(page) => {
            tracing::info!("Scanned {} records", page.records.len());
            let response = FunctionResponse::json(200, &page.records)?;
            if options.allow_any_origin {
                Ok(response.with_any_origin())
            } else {
                Ok(response)
            }
        }
        Err(err) => {
            tracing::error!("Scan failed: {}", err);
            Ok(FunctionResponse::json(500, &err.to_string())?)
        }
    }
}
