use anyhow::Context as _;
use aws_lambda_events::s3::{S3Event, S3EventRecord};
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::{context::Context, models::decode_object_key, process::process_document};

#[tracing::instrument(skip_all)]
pub async fn handler(ctx: Context, event: LambdaEvent<S3Event>) -> Result<(), Error> {
    tracing::trace!("processing event");
    handle_records(&ctx, event.payload.records).await
}

/// Processes every record of the notification in order. The first failure aborts the
/// invocation so the platform can retry it.
#[tracing::instrument(skip_all, fields(record_count = records.len()))]
pub(crate) async fn handle_records(
    ctx: &Context,
    records: Vec<S3EventRecord>,
) -> Result<(), Error> {
    for record in records {
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .context("expected bucket name on s3 record")?;

        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .context("expected object key on s3 record")?;

        let key = decode_object_key(raw_key).inspect_err(|e| {
            tracing::error!(error=?e, raw_key, "unable to decode object key");
        })?;

        process_document(ctx, bucket, &key).await?;
    }

    Ok(())
}
