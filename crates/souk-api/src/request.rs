// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Outbound request descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP verb of an outbound call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiMethod {
    /// GET request - retrieve data.
    #[default]
    Get,
    /// POST request - create or submit data.
    Post,
    /// PUT request - update or replace data.
    Put,
    /// DELETE request - remove data.
    Delete,
}

impl ApiMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ApiMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ApiMethod> for reqwest::Method {
    fn from(method: ApiMethod) -> Self {
        match method {
            ApiMethod::Get => reqwest::Method::GET,
            ApiMethod::Post => reqwest::Method::POST,
            ApiMethod::Put => reqwest::Method::PUT,
            ApiMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Description of one outbound HTTP call: verb, absolute URL, optional JSON
/// payload and the optional auth/integrity headers.
///
/// Descriptors are built per call and consumed by
/// [`Dispatcher::send`](crate::Dispatcher::send). The dispatcher builds a
/// fresh outbound request from the descriptor every time, so reusing a
/// descriptor can never duplicate headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// HTTP verb; GET when not set.
    pub method: ApiMethod,
    /// Absolute target URL.
    pub url: String,
    /// JSON body, attached UTF-8 encoded when present.
    pub payload: Option<Value>,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer_token: Option<String>,
    /// Sent as `X-API-KEY` when present.
    pub api_key: Option<String>,
    /// Sent as `X-Digest` when present; setting it again replaces the value.
    pub integrity_digest: Option<String>,
}

impl RequestDescriptor {
    pub fn new(method: ApiMethod, url: impl Into<String>) -> Self {
        RequestDescriptor {
            method,
            url: url.into(),
            ..RequestDescriptor::default()
        }
    }

    /// GET descriptor for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(ApiMethod::Get, url)
    }

    /// POST descriptor for the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(ApiMethod::Post, url)
    }

    /// PUT descriptor for the given URL.
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(ApiMethod::Put, url)
    }

    /// DELETE descriptor for the given URL.
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(ApiMethod::Delete, url)
    }

    /// Attach a JSON payload.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach a bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Attach an API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Attach an integrity digest, replacing any prior value.
    pub fn with_integrity_digest(mut self, digest: impl Into<String>) -> Self {
        self.integrity_digest = Some(digest.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_get() {
        let request = RequestDescriptor::new(ApiMethod::default(), "http://svc/api");
        assert_eq!(request.method, ApiMethod::Get);
    }

    #[test]
    fn test_builder_methods() {
        let request = RequestDescriptor::post("http://svc/api")
            .with_payload(serde_json::json!({"id": 7}))
            .with_bearer_token("token")
            .with_api_key("key")
            .with_integrity_digest("digest");

        assert_eq!(request.method, ApiMethod::Post);
        assert_eq!(request.url, "http://svc/api");
        assert_eq!(request.payload, Some(serde_json::json!({"id": 7})));
        assert_eq!(request.bearer_token.as_deref(), Some("token"));
        assert_eq!(request.api_key.as_deref(), Some("key"));
        assert_eq!(request.integrity_digest.as_deref(), Some("digest"));
    }

    #[test]
    fn test_digest_latest_value_wins() {
        let request = RequestDescriptor::get("http://svc/api")
            .with_integrity_digest("stale")
            .with_integrity_digest("fresh");

        assert_eq!(request.integrity_digest.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(ApiMethod::Put.to_string(), "PUT");
        assert_eq!(reqwest::Method::from(ApiMethod::Delete), reqwest::Method::DELETE);
    }
}
