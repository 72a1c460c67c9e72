use std::path::Path;

use lambda_runtime::tracing;

use crate::storage::ObjectStore;

pub const UPLOADED_MESSAGE: &str = "Uploaded file to bucket successfully.";

/// Uploads `path` and returns the line to report.
///
/// Failures are folded into the returned text rather than propagated.
pub async fn upload_file<S: ObjectStore + ?Sized>(
    store: &S,
    path: &Path,
    bucket: &str,
    key: &str,
) -> String {
    match store.upload_file(path, bucket, key).await {
        Ok(()) => UPLOADED_MESSAGE.to_string(),
        Err(err) => {
            tracing::debug!("Upload of {} failed: {:?}", path.display(), err);
            format!("Upload failed: {err}")
        }
    }
}
