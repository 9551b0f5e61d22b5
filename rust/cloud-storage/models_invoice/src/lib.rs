#![deny(missing_docs)]
//! Types shared by the invoice intake lambdas.
//!
//! The issuer, processor and reader never talk to each other directly, they only agree on the
//! shapes in this crate: the object key handed out for an upload, the item written to the invoice
//! table, and the json bodies returned through api gateway.

pub mod api;
mod file_name;
mod ocr;
mod owner;
mod record;

pub use file_name::{INVOICE_CONTENT_TYPE, InvoiceFileName};
pub use ocr::{BlockKind, TextBlock};
pub use owner::{FALLBACK_OWNER_ID, OwnerId};
pub use record::{InvoiceLookup, InvoiceRecord, ProcessingStatus, attributes};
