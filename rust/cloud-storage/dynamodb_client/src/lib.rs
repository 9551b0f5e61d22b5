use aws_config::SdkConfig;
use models_invoice::{InvoiceLookup, InvoiceRecord, OwnerId};

mod invoice;

#[derive(Debug, Clone)]
pub struct DynamodbClient {
    pub invoice: InvoiceTable,
}

impl DynamodbClient {
    pub fn new(aws_config: &SdkConfig, invoice_table: String) -> Self {
        let client = aws_sdk_dynamodb::Client::new(aws_config);

        Self::new_from_client(client, invoice_table)
    }

    pub fn new_from_client(client: aws_sdk_dynamodb::Client, invoice_table: String) -> Self {
        Self {
            invoice: InvoiceTable {
                table: invoice_table,
                client,
            },
        }
    }
}

/// The invoice table, keyed by `UserId` (partition) and `InvoiceId` (sort)
#[derive(Debug, Clone)]
pub struct InvoiceTable {
    table: String,
    client: aws_sdk_dynamodb::Client,
}

impl InvoiceTable {
    /// Writes the record, replacing whatever was stored under the same key.
    #[tracing::instrument(
        skip(self, record),
        fields(owner_id=%record.owner_id, invoice_id=%record.document_id)
    )]
    pub async fn put_invoice(&self, record: &InvoiceRecord) -> anyhow::Result<()> {
        invoice::put_invoice(&self.client, &self.table, record).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_invoice(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
    ) -> anyhow::Result<InvoiceLookup> {
        invoice::get_invoice(&self.client, &self.table, owner_id, invoice_id).await
    }

    /// Marks the invoice as picked up by the processor
    #[tracing::instrument(skip(self))]
    pub async fn mark_processing(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
    ) -> anyhow::Result<()> {
        invoice::set_status(
            &self.client,
            &self.table,
            owner_id,
            invoice_id,
            invoice::StatusUpdate::Processing,
        )
        .await
    }

    /// Marks the invoice as failed, recording why
    #[tracing::instrument(skip(self))]
    pub async fn mark_failed(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
        reason: &str,
    ) -> anyhow::Result<()> {
        invoice::set_status(
            &self.client,
            &self.table,
            owner_id,
            invoice_id,
            invoice::StatusUpdate::Failed { reason },
        )
        .await
    }
}
