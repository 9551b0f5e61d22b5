use anyhow::Context;
use models_invoice::{FALLBACK_OWNER_ID, OwnerId};

/// The configuration parameters for the processor, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The invoice table name
    pub table_name: String,

    /// Owner used when the uploaded object carries no owner metadata
    pub default_owner_id: OwnerId,

    /// The user metadata key (without the `x-amz-meta-` prefix) holding the uploader's id
    pub owner_metadata_key: String,

    /// Whether to write processing / failed markers around the extraction
    pub track_processing_status: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let table_name = std::env::var("TABLE_NAME").context("TABLE_NAME must be provided")?;

        let default_owner_id = OwnerId::new(
            std::env::var("DEFAULT_OWNER_ID").unwrap_or(FALLBACK_OWNER_ID.to_string()),
        );

        let owner_metadata_key =
            std::env::var("OWNER_METADATA_KEY").unwrap_or("userid".to_string());

        let track_processing_status = match std::env::var("TRACK_PROCESSING_STATUS") {
            Ok(value) => parse_flag(&value).context("TRACK_PROCESSING_STATUS must be a boolean")?,
            Err(_) => false,
        };

        Ok(Config {
            table_name,
            default_owner_id,
            owner_metadata_key,
            track_processing_status,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(anyhow::anyhow!("unrecognized flag value {other}")),
    }
}
