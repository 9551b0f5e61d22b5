use std::collections::BTreeMap;

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use aws_lambda_events::encodings::Body;
use http::{HeaderMap, HeaderValue, StatusCode, header};

use crate::ProcessingStatus;

/// A plain old json error response.
/// Every failure the api returns has an `error` key.
#[derive(serde::Serialize, Debug)]
pub struct ErrorResponse<'a> {
    /// message to explain failure
    pub error: &'a str,
    /// lifecycle state of the invoice, when the failure is about one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProcessingStatus>,
    /// recorded processing failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}

impl<'a> ErrorResponse<'a> {
    /// an error response carrying only a message
    pub fn new(error: &'a str) -> Self {
        Self {
            error,
            status: None,
            reason: None,
        }
    }
}

/// Body returned by the upload url issuer
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadUrlResponse {
    /// expiring url to PUT the pdf to
    pub upload_url: String,
    /// the object key, which is also the invoice id to poll with
    pub file_name: String,
    /// headers the PUT has to carry verbatim, they are part of the signature
    pub upload_headers: BTreeMap<String, String>,
}

/// Cross origin headers attached to every response
pub fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers
}

/// Serialize `body` into a proxy response with the cors headers set
pub fn json_response<T>(status: StatusCode, body: &T) -> ApiGatewayProxyResponse
where
    T: serde::Serialize + std::fmt::Debug,
{
    let (status, body) = match serde_json::to_string(body) {
        Ok(body) => (status, body),
        Err(e) => {
            tracing::error!(error=?e, body=?body, "unable to serialize response body");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"unable to serialize response"}"#.to_string(),
            )
        }
    };

    let mut response = ApiGatewayProxyResponse::default();
    response.status_code = i64::from(status.as_u16());
    response.headers = cors_headers();
    response.body = Some(Body::Text(body));
    response
}

/// Shorthand for a json response with just an error message
pub fn error_response(status: StatusCode, message: &str) -> ApiGatewayProxyResponse {
    json_response(status, &ErrorResponse::new(message))
}
