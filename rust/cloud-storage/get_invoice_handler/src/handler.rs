use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use http::StatusCode;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use models_invoice::{
    InvoiceLookup, ProcessingStatus,
    api::{ApiRequest, ErrorResponse, error_response, json_response},
};

use crate::{config::Config, service::dynamodb::InvoiceReader};

/// Path parameter holding the invoice id, which is the uploaded file name
const INVOICE_ID_PARAM: &str = "invoice_id";

/// Handles the api gateway request for a processed invoice
#[tracing::instrument(skip_all)]
pub async fn handler(
    reader: &InvoiceReader,
    config: &Config,
    event: LambdaEvent<ApiRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    tracing::trace!("processing event");
    Ok(get_invoice(reader, config, &event.payload).await)
}

/// Looks up the invoice for the caller. A document that has not been processed yet is a 404 so
/// clients can keep polling.
#[tracing::instrument(skip_all, fields(owner_id, invoice_id))]
pub(crate) async fn get_invoice(
    reader: &InvoiceReader,
    config: &Config,
    request: &ApiRequest,
) -> ApiGatewayProxyResponse {
    let Some(invoice_id) = request.path_parameter(INVOICE_ID_PARAM) else {
        tracing::warn!("request without invoice id");
        return error_response(
            StatusCode::BAD_REQUEST,
            "invoice_id path parameter is required",
        );
    };
    let owner_id = request.owner_or(&config.default_owner_id);

    let span = tracing::Span::current();
    span.record("owner_id", owner_id.as_str());
    span.record("invoice_id", invoice_id);

    match reader.get_invoice(&owner_id, invoice_id).await {
        Ok(InvoiceLookup::Complete(record)) => json_response(StatusCode::OK, &record),
        Ok(InvoiceLookup::Missing) => {
            tracing::debug!("invoice not found");
            error_response(StatusCode::NOT_FOUND, "Processing not finished yet")
        }
        Ok(InvoiceLookup::Processing) => json_response(
            StatusCode::NOT_FOUND,
            &ErrorResponse {
                error: "Processing not finished yet",
                status: Some(ProcessingStatus::Processing),
                reason: None,
            },
        ),
        Ok(InvoiceLookup::Failed { reason }) => json_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            &ErrorResponse {
                error: "Processing failed",
                status: Some(ProcessingStatus::Failed),
                reason: reason.as_deref(),
            },
        ),
        Err(e) => {
            tracing::error!(error=?e, "unable to read invoice");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &format!("{e:#}"))
        }
    }
}
