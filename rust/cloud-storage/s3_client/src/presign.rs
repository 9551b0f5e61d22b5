use anyhow::Context;
use std::collections::HashMap;
use aws_sdk_s3::Client;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Generate a URL for a presigned PUT request.
/// The metadata is part of the signature, the uploader has to send the matching
/// `x-amz-meta-*` headers unchanged.
pub(crate) async fn put_presigned_url(
    client: &Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    metadata: HashMap<String, String>,
    duration_seconds: u64,
) -> anyhow::Result<String> {
    let expires_in = Duration::from_secs(duration_seconds);
    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .set_metadata((!metadata.is_empty()).then_some(metadata))
        .presigned(
            PresigningConfig::expires_in(expires_in)
                .context("failed to create presigning config")?,
        )
        .await
        .context(format!("failed to presign upload of {key} to bucket {bucket}"))?;

    Ok(presigned_request.uri().to_string())
}
