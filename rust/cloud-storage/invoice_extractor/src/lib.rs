//! Extraction of the interesting bits of an invoice from ocr output.
//!
//! The total is whatever currency shaped string appears first in the text. There is no label
//! proximity check or currency handling, so a line item printed above the total wins.

use lazy_static::lazy_static;
use models_invoice::{BlockKind, TextBlock};
use regex::Regex;

/// Stored when the text contains nothing that looks like an amount
pub const NO_TOTAL_DETECTED: &str = "0.00";

lazy_static! {
    /// optional `$`, digits, a decimal point and exactly two digits
    static ref AMOUNT_REGEX: Regex = Regex::new(r"\$?\d+\.\d{2}").unwrap();
}

/// The result of running extraction over a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// every line of the document followed by a newline
    pub raw_text: String,
    /// first amount found, or [NO_TOTAL_DETECTED]
    pub detected_total: String,
}

/// Joins the text of every line block, in the order given, each followed by `\n`.
/// Words, pages and form fields are skipped since lines already cover their text.
pub fn assemble_raw_text<'a, I>(blocks: I) -> String
where
    I: IntoIterator<Item = &'a TextBlock>,
{
    blocks
        .into_iter()
        .filter(|block| block.kind == BlockKind::Line)
        .filter_map(|block| block.text.as_deref())
        .fold(String::new(), |mut raw_text, line| {
            raw_text.push_str(line);
            raw_text.push('\n');
            raw_text
        })
}

/// Returns the first amount in `text`, e.g. `$123.45` or `99.00`
pub fn detect_total(text: &str) -> &str {
    AMOUNT_REGEX
        .find(text)
        .map(|m| m.as_str())
        .unwrap_or(NO_TOTAL_DETECTED)
}

/// Assembles the raw text and detects the total in one pass over the blocks
#[tracing::instrument(skip(blocks))]
pub fn extract(blocks: &[TextBlock]) -> Extraction {
    let raw_text = assemble_raw_text(blocks);
    let detected_total = detect_total(&raw_text).to_string();

    tracing::debug!(
        block_count = blocks.len(),
        text_length = raw_text.len(),
        detected_total = %detected_total,
        "extracted invoice text"
    );

    Extraction {
        raw_text,
        detected_total,
    }
}
