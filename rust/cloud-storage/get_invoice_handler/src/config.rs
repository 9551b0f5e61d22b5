use anyhow::Context;
use models_invoice::{FALLBACK_OWNER_ID, OwnerId};

/// The configuration parameters for the invoice reader, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The invoice table name
    pub table_name: String,

    /// Owner used when the request is not authenticated
    pub default_owner_id: OwnerId,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name = std::env::var("TABLE_NAME").context("TABLE_NAME must be provided")?;

        let default_owner_id = OwnerId::new(
            std::env::var("DEFAULT_OWNER_ID").unwrap_or(FALLBACK_OWNER_ID.to_string()),
        );

        Ok(Config {
            table_name,
            default_owner_id,
        })
    }
}
