use crate::OwnerId;

/// Attribute names of the invoice table
pub mod attributes {
    /// partition key
    pub const OWNER_ID: &str = "UserId";
    /// sort key, the uploaded object key
    pub const INVOICE_ID: &str = "InvoiceId";
    /// the first currency shaped string found in the document
    pub const DETECTED_TOTAL: &str = "DetectedTotal";
    /// newline joined ocr lines
    pub const RAW_TEXT: &str = "RawText";
    /// lifecycle marker, only present when status tracking is enabled
    pub const PROCESSING_STATUS: &str = "ProcessingStatus";
    /// error text recorded alongside a failed status
    pub const FAILURE_REASON: &str = "FailureReason";
}

/// Lifecycle of an invoice while the processor works on it
#[derive(
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProcessingStatus {
    /// the processor has picked the document up
    Processing,
    /// the record holds the extraction result
    Complete,
    /// ocr or the write failed, see the failure reason
    Failed,
}

/// One processed invoice, as stored in and returned from the invoice table
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct InvoiceRecord {
    /// who submitted the invoice
    #[serde(rename = "UserId")]
    pub owner_id: OwnerId,
    /// the object key of the uploaded document
    #[serde(rename = "InvoiceId")]
    pub document_id: String,
    /// decimal formatted total, `0.00` when nothing was found
    pub detected_total: String,
    /// the full ocr text
    pub raw_text: String,
    /// omitted entirely unless status tracking is enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<ProcessingStatus>,
}

/// The outcome of looking up an invoice by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceLookup {
    /// nothing has been written for this key
    Missing,
    /// the processor marked the document as in progress
    Processing,
    /// the processor marked the document as failed
    Failed {
        /// the recorded error text, if any
        reason: Option<String>,
    },
    /// the extraction result
    Complete(InvoiceRecord),
}
