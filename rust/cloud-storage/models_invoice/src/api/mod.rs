//! Models for the api gateway facing lambdas

mod request;
mod response;

pub use request::{ApiRequest, RequestContext};
pub use response::{
    ErrorResponse, UploadUrlResponse, cors_headers, error_response, json_response,
};
