use std::sync::Arc;

use crate::{config::Config, service};

#[derive(Clone)]
pub struct Context {
    pub analyzer: Arc<service::textract::DocumentAnalyzer>,
    pub metadata: Arc<service::s3::ObjectMetadata>,
    pub store: Arc<service::dynamodb::InvoiceStore>,
    pub config: Arc<Config>,
}
