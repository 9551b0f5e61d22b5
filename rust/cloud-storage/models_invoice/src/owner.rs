use std::fmt::Display;

/// The owner used when a request or upload carries no identity
pub const FALLBACK_OWNER_ID: &str = "demo_user";

/// Identifies the party that submitted an invoice.
/// Together with the invoice id this forms the key of the invoice table.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// wrap the input string as an owner id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// borrow the inner id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
