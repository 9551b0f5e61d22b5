use std::collections::HashMap;

#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockObjectMetadataClient as ObjectMetadata;
#[cfg(not(test))]
pub use ObjectMetadataClient as ObjectMetadata;

#[derive(Clone, Debug)]
pub struct ObjectMetadataClient {
    /// Inner S3 client
    inner: s3_client::S3,
}

#[cfg_attr(test, automock)]
impl ObjectMetadataClient {
    pub fn new(inner: s3_client::S3) -> Self {
        Self { inner }
    }

    pub async fn get_user_metadata(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<HashMap<String, String>> {
        self.inner.get_user_metadata(bucket, key).await
    }
}
