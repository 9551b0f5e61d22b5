use models_invoice::{InvoiceLookup, OwnerId};
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockInvoiceReaderClient as InvoiceReader;
#[cfg(not(test))]
pub use InvoiceReaderClient as InvoiceReader;

#[derive(Clone, Debug)]
pub struct InvoiceReaderClient {
    inner: dynamodb_client::InvoiceTable,
}

#[cfg_attr(test, automock)]
impl InvoiceReaderClient {
    pub fn new(inner: dynamodb_client::InvoiceTable) -> Self {
        Self { inner }
    }

    pub async fn get_invoice(
        &self,
        owner_id: &OwnerId,
        invoice_id: &str,
    ) -> anyhow::Result<InvoiceLookup> {
        self.inner.get_invoice(owner_id, invoice_id).await
    }
}
