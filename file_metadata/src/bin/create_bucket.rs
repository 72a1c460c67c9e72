use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client as S3Client;
use file_metadata::config::Settings;
use file_metadata::provision::{create_bucket, created_message};
use file_metadata::S3Store;
use lambda_runtime::tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing::subscriber::fmt().with_writer(std::io::stderr).init();
    let settings = Settings::from_env();
    let shared_config = aws_config::defaults(BehaviorVersion::v2025_01_17())
        .region(Region::new(settings.bucket_region.clone()))
        .load()
        .await;
    let store = S3Store::new(S3Client::new(&shared_config));

    let created = create_bucket(&store, &settings.bucket_name, &settings.bucket_region).await?;
    println!("{}", created_message(&created));
    Ok(())
}
