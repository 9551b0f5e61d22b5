use std::collections::HashMap;

use anyhow::Context;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use models_invoice::{InvoiceLookup, InvoiceRecord, OwnerId, ProcessingStatus, attributes};
use serde_dynamo::{Item, from_item, to_item};

pub(crate) enum StatusUpdate<'a> {
    Processing,
    Failed { reason: &'a str },
}

/// Unconditional put, there is no version check so the last write wins
pub(crate) async fn put_invoice(
    client: &Client,
    table: &str,
    record: &InvoiceRecord,
) -> anyhow::Result<()> {
    let item: Item = to_item(record).context("failed to convert invoice record")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item.into()))
        .send()
        .await
        .context("could not put invoice item, dynamodb")?;

    Ok(())
}

pub(crate) async fn get_invoice(
    client: &Client,
    table: &str,
    owner_id: &OwnerId,
    invoice_id: &str,
) -> anyhow::Result<InvoiceLookup> {
    let item = client
        .get_item()
        .table_name(table)
        .key(
            attributes::OWNER_ID,
            AttributeValue::S(owner_id.to_string()),
        )
        .key(
            attributes::INVOICE_ID,
            AttributeValue::S(invoice_id.to_owned()),
        )
        .send()
        .await
        .context("failed to get item from invoice table")?
        .item;

    match item {
        Some(item) => lookup_from_item(item),
        None => Ok(InvoiceLookup::Missing),
    }
}

/// Only touches the status attributes, any previous extraction result is left in place until
/// the processor puts the new record.
pub(crate) async fn set_status(
    client: &Client,
    table: &str,
    owner_id: &OwnerId,
    invoice_id: &str,
    update: StatusUpdate<'_>,
) -> anyhow::Result<()> {
    let request = client
        .update_item()
        .table_name(table)
        .key(
            attributes::OWNER_ID,
            AttributeValue::S(owner_id.to_string()),
        )
        .key(
            attributes::INVOICE_ID,
            AttributeValue::S(invoice_id.to_owned()),
        )
        .expression_attribute_names("#status", attributes::PROCESSING_STATUS)
        .expression_attribute_names("#reason", attributes::FAILURE_REASON);

    let request = match update {
        StatusUpdate::Processing => request
            .update_expression("SET #status = :status REMOVE #reason")
            .expression_attribute_values(
                ":status",
                AttributeValue::S(ProcessingStatus::Processing.to_string()),
            ),
        StatusUpdate::Failed { reason } => request
            .update_expression("SET #status = :status, #reason = :reason")
            .expression_attribute_values(
                ":status",
                AttributeValue::S(ProcessingStatus::Failed.to_string()),
            )
            .expression_attribute_values(":reason", AttributeValue::S(reason.to_owned())),
    };

    request
        .send()
        .await
        .context("failed to update invoice processing status")?;

    Ok(())
}

/// Decides what a stored item means for a reader based on its status attribute.
/// Items written without status tracking have no status and are complete records.
fn lookup_from_item(item: HashMap<String, AttributeValue>) -> anyhow::Result<InvoiceLookup> {
    let status = item
        .get(attributes::PROCESSING_STATUS)
        .and_then(|status| status.as_s().ok())
        .map(|status| status.parse::<ProcessingStatus>())
        .transpose()
        .context("unknown processing status on invoice item")?;

    match status {
        Some(ProcessingStatus::Processing) => Ok(InvoiceLookup::Processing),
        Some(ProcessingStatus::Failed) => Ok(InvoiceLookup::Failed {
            reason: item
                .get(attributes::FAILURE_REASON)
                .and_then(|reason| reason.as_s().ok())
                .cloned(),
        }),
        Some(ProcessingStatus::Complete) | None => {
            let record: InvoiceRecord =
                from_item(item).context("failed to deserialize invoice item")?;
            Ok(InvoiceLookup::Complete(record))
        }
    }
}
