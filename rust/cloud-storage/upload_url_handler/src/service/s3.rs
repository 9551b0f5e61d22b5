use std::collections::HashMap;

use models_invoice::INVOICE_CONTENT_TYPE;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockUploadStorageClient as UploadStorage;
#[cfg(not(test))]
pub use UploadStorageClient as UploadStorage;

#[derive(Clone, Debug)]
pub struct UploadStorageClient {
    /// Inner S3 client
    inner: s3_client::S3,
    /// Bucket invoices are uploaded into
    bucket: String,
}

#[cfg_attr(test, automock)]
impl UploadStorageClient {
    pub fn new(inner: s3_client::S3, bucket: String) -> Self {
        Self { inner, bucket }
    }

    /// Presigns a PUT of a pdf to `key` in the upload bucket, binding the given user metadata
    pub async fn presign_invoice_upload(
        &self,
        key: &str,
        metadata: HashMap<String, String>,
        expires_in_seconds: u64,
    ) -> anyhow::Result<String> {
        self.inner
            .put_presigned_url(
                &self.bucket,
                key,
                INVOICE_CONTENT_TYPE,
                metadata,
                expires_in_seconds,
            )
            .await
    }
}
