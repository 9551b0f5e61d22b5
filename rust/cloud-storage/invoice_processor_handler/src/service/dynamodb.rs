use models_invoice::{InvoiceRecord, OwnerId};
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockInvoiceStoreClient as InvoiceStore;
#[cfg(not(test))]
pub use InvoiceStoreClient as InvoiceStore;

#[derive(Clone, Debug)]
pub struct InvoiceStoreClient {
    inner: dynamodb_client::InvoiceTable,
}

#[cfg_attr(test, automock)]
impl InvoiceStoreClient {
    pub fn new(inner: dynamodb_client::InvoiceTable) -> Self {
        Self { inner }
    }

    pub async fn put_invoice(&self, record: &InvoiceRecord) -> anyhow::Result<()> {
        self.inner.put_invoice(record).await
    }

    pub async fn mark_processing(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
    ) -> anyhow::Result<()> {
        self.inner.mark_processing(owner_id, invoice_id).await
    }

    pub async fn mark_failed(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
        reason: &str,
    ) -> anyhow::Result<()> {
        self.inner.mark_failed(owner_id, invoice_id, reason).await
    }
}
