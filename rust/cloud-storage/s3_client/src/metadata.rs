use anyhow::Context;
use std::collections::HashMap;

/// Reads the user metadata of an object through a head request
#[tracing::instrument(skip(client))]
pub(crate) async fn get_user_metadata(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> anyhow::Result<HashMap<String, String>> {
    let resp = client
        .head_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .context(format!("could not head item {key} in bucket {bucket}"))?;

    Ok(resp.metadata.unwrap_or_default())
}
