use models_invoice::TextBlock;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockDocumentAnalyzerClient as DocumentAnalyzer;
#[cfg(not(test))]
pub use DocumentAnalyzerClient as DocumentAnalyzer;

#[derive(Clone, Debug)]
pub struct DocumentAnalyzerClient {
    /// Inner Textract client
    inner: textract_client::Textract,
}

#[cfg_attr(test, automock)]
impl DocumentAnalyzerClient {
    pub fn new(inner: textract_client::Textract) -> Self {
        Self { inner }
    }

    pub async fn analyze_document(
        &self,
        bucket: &str,
        key: &str,
    ) -> anyhow::Result<Vec<TextBlock>> {
        self.inner.analyze_document(bucket, key).await
    }
}
