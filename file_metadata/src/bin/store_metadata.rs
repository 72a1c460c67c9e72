use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client as DynamoClient;
use file_metadata::config::Settings;
use file_metadata::store_metadata::function_handler;
use file_metadata::DynamoTable;
use lambda_runtime::{run, service_fn, tracing, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let settings = Settings::from_env();
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let table = DynamoTable::new(DynamoClient::new(&shared_config), settings.table_name);
    run(service_fn(|event| function_handler(event, &table))).await
}
