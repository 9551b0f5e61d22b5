use std::fmt::Display;
use uuid::Uuid;

/// The only content type an upload url is signed for
pub const INVOICE_CONTENT_TYPE: &str = "application/pdf";

const EXTENSION: &str = "pdf";

/// The object key handed out for a new upload, `<uuid>.pdf`.
/// It is generated server side so a client can never pick the key of somebody else's document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceFileName {
    id: Uuid,
}

impl InvoiceFileName {
    /// generate a new random file name
    pub fn generate() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Display for InvoiceFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_is_uuid_with_pdf_extension() {
        let file_name = InvoiceFileName::generate().to_string();
        let (stem, extension) = file_name.rsplit_once('.').unwrap();

        assert_eq!(extension, "pdf");
        let parsed = Uuid::parse_str(stem).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(stem, parsed.hyphenated().to_string());
    }

    #[test]
    fn file_names_are_unique() {
        let names: std::collections::HashSet<String> = (0..1000)
            .map(|_| InvoiceFileName::generate().to_string())
            .collect();
        assert_eq!(names.len(), 1000);
    }
}
