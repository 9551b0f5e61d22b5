/// The kind of an ocr block, independent of the ocr service that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// a whole page
    Page,
    /// a single line of text
    Line,
    /// a single word
    Word,
    /// a form field key or value
    KeyValueSet,
    /// anything else the service returns, keyed by its raw name
    Other(String),
}

/// A single block of ocr output, in the order the service returned it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// what this block represents
    pub kind: BlockKind,
    /// detected text, absent for structural blocks such as pages
    pub text: Option<String>,
}

impl TextBlock {
    /// convenience constructor for a line block
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Line,
            text: Some(text.into()),
        }
    }
}
