use crate::errors::AppResult;
use azure_storage_blobs::prelude::*;
use bytes::Bytes;
use tracing::info;

/// MIME type of the uploaded scan.
const COVER_CONTENT_TYPE: &str = "application/pdf";

/// Uploads the cover bytes as a block blob under the given name.
///
/// A rerun on the same day puts the same name again and the service replaces
/// the existing blob. There is no retry here: a failed upload ends the run.
///
/// # Errors
///
/// Returns `StorageError` if the put is rejected or the transport fails.
pub async fn upload_cover(container: &ContainerClient, blob_name: &str, body: Bytes) -> AppResult<()> {
    let size = body.len();
    container
        .blob_client(blob_name)
        .put_block_blob(body)
        .content_type(COVER_CONTENT_TYPE)
        .await?;

    info!(blob = blob_name, bytes = size, "Cover uploaded");
    Ok(())
}
