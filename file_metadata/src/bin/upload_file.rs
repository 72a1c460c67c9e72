use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use file_metadata::config::Settings;
use file_metadata::upload::upload_file;
use file_metadata::S3Store;
use lambda_runtime::tracing;

#[tokio::main]
async fn main() {
    tracing::subscriber::fmt().with_writer(std::io::stderr).init();
    let settings = Settings::from_env();
    let shared_config = aws_config::load_defaults(BehaviorVersion::v2025_01_17()).await;
    let store = S3Store::new(S3Client::new(&shared_config));

    let message = upload_file(
        &store,
        &settings.upload_file,
        &settings.bucket_name,
        &settings.upload_key,
    )
    .await;
    println!("{message}");
}
