use std::collections::HashMap;

use crate::OwnerId;

/// The subset of an api gateway proxy event the intake lambdas read.
/// Works for both REST and HTTP apis since every field is optional.
#[derive(serde::Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiRequest {
    /// path parameters, api gateway sends `null` when there are none
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    /// request metadata including the authorizer output
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

/// The request context of an api gateway proxy event
#[derive(serde::Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// whatever the configured authorizer produced
    #[serde(default)]
    pub authorizer: Option<serde_json::Value>,
}

impl ApiRequest {
    /// get a non empty path parameter by name
    pub fn path_parameter(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// The identity the authorizer attached to this request, if any.
    ///
    /// Checks cognito user pool claims (REST api), jwt claims (HTTP api) and finally the
    /// principal id set by a lambda authorizer.
    pub fn authenticated_owner(&self) -> Option<OwnerId> {
        let authorizer = self.request_context.as_ref()?.authorizer.as_ref()?;

        authorizer
            .get("claims")
            .and_then(|claims| claims.get("sub"))
            .or_else(|| {
                authorizer
                    .get("jwt")
                    .and_then(|jwt| jwt.get("claims"))
                    .and_then(|claims| claims.get("sub"))
            })
            .or_else(|| authorizer.get("principalId"))
            .and_then(|sub| sub.as_str())
            .filter(|sub| !sub.is_empty())
            .map(OwnerId::new)
    }

    /// the authenticated owner, or the configured default when the request carries no identity
    pub fn owner_or(&self, default_owner: &OwnerId) -> OwnerId {
        self.authenticated_owner()
            .unwrap_or_else(|| default_owner.clone())
    }
}
