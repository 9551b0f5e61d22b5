use anyhow::Context;
use models_invoice::{FALLBACK_OWNER_ID, OwnerId};

/// How long an issued upload url stays valid
const DEFAULT_PRESIGNED_URL_TTL_SECONDS: u64 = 300;

/// The configuration parameters for the upload url issuer, pulled from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// The bucket invoices are uploaded into
    pub upload_bucket_name: String,

    /// Validity window of the presigned url
    pub presigned_url_ttl_seconds: u64,

    /// Owner used when the request is not authenticated
    pub default_owner_id: OwnerId,

    /// The user metadata key (without the `x-amz-meta-` prefix) the owner is signed into.
    /// Must match the key the processor reads.
    pub owner_metadata_key: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let upload_bucket_name = std::env::var("UPLOAD_BUCKET_NAME")
            .context("UPLOAD_BUCKET_NAME must be provided")?;

        let presigned_url_ttl_seconds = match std::env::var("PRESIGNED_URL_TTL_SECONDS") {
            Ok(ttl) => ttl
                .parse::<u64>()
                .context("PRESIGNED_URL_TTL_SECONDS must be a number of seconds")?,
            Err(_) => DEFAULT_PRESIGNED_URL_TTL_SECONDS,
        };

        let default_owner_id = OwnerId::new(
            std::env::var("DEFAULT_OWNER_ID").unwrap_or(FALLBACK_OWNER_ID.to_string()),
        );

        let owner_metadata_key =
            std::env::var("OWNER_METADATA_KEY").unwrap_or("userid".to_string());

        Ok(Config {
            upload_bucket_name,
            presigned_url_ttl_seconds,
            default_owner_id,
            owner_metadata_key,
        })
    }
}
