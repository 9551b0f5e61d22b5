use models_invoice::TextBlock;

mod analyze;

#[derive(Clone, Debug)]
pub struct Textract {
    /// Inner Textract client
    inner: aws_sdk_textract::Client,
}

impl Textract {
    pub fn new(inner: aws_sdk_textract::Client) -> Self {
        Self { inner }
    }

    /// Runs forms analysis over a document already stored in s3.
    /// Blocks are returned in the order textract produced them.
    #[tracing::instrument(skip(self))]
    pub async fn analyze_document(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<Vec<TextBlock>> {
        analyze::analyze_document(&self.inner, bucket, key).await
    }
}
