use std::collections::HashMap;

mod metadata;
mod presign;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Gets a presigned url that allows a single PUT of the provided key.
    /// The uploader must send the same content type and user metadata the url was signed with.
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        metadata: HashMap<String, String>,
        duration_seconds: u64,
    ) -> anyhow::Result<String> {
        presign::put_presigned_url(
            &self.inner,
            bucket,
            key,
            content_type,
            metadata,
            duration_seconds,
        )
        .await
    }

    /// Gets the user defined metadata of an object, the `x-amz-meta-*` headers without the prefix.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<HashMap<String, String>> {
        metadata::get_user_metadata(&self.inner, bucket, key).await
    }
}
