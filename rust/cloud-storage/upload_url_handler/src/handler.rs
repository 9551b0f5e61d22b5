use std::collections::{BTreeMap, HashMap};

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use http::{StatusCode, header};
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use models_invoice::{
    INVOICE_CONTENT_TYPE, InvoiceFileName, OwnerId,
    api::{ApiRequest, UploadUrlResponse, error_response, json_response},
};

use crate::{config::Config, service::s3::UploadStorage};

/// Prefix S3 puts in front of user metadata keys on the wire
const USER_METADATA_HEADER_PREFIX: &str = "x-amz-meta-";

/// Handles the api gateway request for a new upload url
#[tracing::instrument(skip_all)]
pub async fn handler(
    storage: &UploadStorage,
    config: &Config,
    event: LambdaEvent<ApiRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    tracing::trace!("processing event");
    Ok(issue_upload_url(storage, config, &event.payload).await)
}

/// Generates a fresh invoice file name and a presigned url to upload it to.
/// The caller's owner id is signed into the url as object metadata, which is where the
/// processor picks it up. Failures are never retried and the underlying error is not exposed.
#[tracing::instrument(skip_all, fields(owner_id, file_name))]
pub(crate) async fn issue_upload_url(
    storage: &UploadStorage,
    config: &Config,
    request: &ApiRequest,
) -> ApiGatewayProxyResponse {
    let owner_id = request.owner_or(&config.default_owner_id);
    let file_name = InvoiceFileName::generate().to_string();

    let span = tracing::Span::current();
    span.record("owner_id", owner_id.as_str());
    span.record("file_name", file_name.as_str());

    let metadata = owner_metadata(config, &owner_id);

    match storage
        .presign_invoice_upload(
            &file_name,
            metadata.clone(),
            config.presigned_url_ttl_seconds,
        )
        .await
    {
        Ok(upload_url) => {
            tracing::info!("issued upload url");
            json_response(
                StatusCode::OK,
                &UploadUrlResponse {
                    upload_url,
                    file_name,
                    upload_headers: upload_headers(metadata),
                },
            )
        }
        Err(e) => {
            tracing::error!(error=?e, "could not generate upload url");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate URL")
        }
    }
}

fn owner_metadata(config: &Config, owner_id: &OwnerId) -> HashMap<String, String> {
    HashMap::from([(config.owner_metadata_key.clone(), owner_id.to_string())])
}

/// The headers the client has to send with the PUT for the signature to match
fn upload_headers(metadata: HashMap<String, String>) -> BTreeMap<String, String> {
    metadata
        .into_iter()
        .map(|(key, value)| (format!("{USER_METADATA_HEADER_PREFIX}{key}"), value))
        .chain([(
            header::CONTENT_TYPE.as_str().to_string(),
            INVOICE_CONTENT_TYPE.to_string(),
        )])
        .collect()
}
