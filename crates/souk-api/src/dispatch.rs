// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Typed dispatch of request descriptors.

use std::time::Duration;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use crate::envelope::Envelope;
use crate::request::RequestDescriptor;

/// Fixed per-call timeout applied to every dispatched request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Bound for types the dispatcher can always produce.
///
/// [`Dispatcher::send`] never surfaces an error, so its target type must know
/// how to represent a synthesized failure. [`Envelope`] implements this; any
/// envelope-shaped response type a service defines can too.
pub trait Enveloped: DeserializeOwned {
    /// Build the failure value the dispatcher returns when the call could not
    /// produce a payload.
    fn failure(errors: Vec<String>, status_code: u16) -> Self;
}

impl<T: DeserializeOwned> Enveloped for Envelope<T> {
    fn failure(errors: Vec<String>, status_code: u16) -> Self {
        Envelope::fail(errors, status_code)
    }
}

/// Generic engine that executes a [`RequestDescriptor`] and returns an
/// envelope-shaped value.
///
/// The dispatcher owns one pooled [`reqwest::Client`] with a fixed timeout;
/// cloning the dispatcher shares the pool. Concurrent sends are fully
/// independent, and dropping the returned future aborts the in-flight call.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: reqwest::Client,
}

impl Dispatcher {
    /// Create a dispatcher with the fixed [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a dispatcher with an explicit per-call timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::from_client(client))
    }

    /// Wrap an already-configured client, e.g. one shared across components.
    pub fn from_client(client: reqwest::Client) -> Self {
        Dispatcher { client }
    }

    /// Execute the descriptor and return the response deserialized as `T`.
    ///
    /// This never returns an error: every failure mode collapses into
    /// `T::failure(..)`.
    /// - Network-level failures (timeout, refused, DNS, TLS) yield a failure
    ///   value with status 500 and the underlying error as the sole entry.
    /// - A response whose body is empty, JSON `null` or not deserializable as
    ///   `T` yields a failure value carrying the textual status line and the
    ///   observed status code.
    /// Exactly one outbound call is made per invocation; there are no
    /// retries. Each failure emits one structured log event.
    pub async fn send<T: Enveloped>(&self, request: &RequestDescriptor) -> T {
        match self.execute(request).await {
            Ok(value) => value,
            Err(err) => {
                error!(
                    category = "dispatch",
                    method = %request.method,
                    url = %request.url,
                    error = %err,
                    "outbound call failed"
                );
                T::failure(
                    vec![err.to_string()],
                    reqwest::StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                )
            }
        }
    }

    async fn execute<T: Enveloped>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<T, reqwest::Error> {
        let mut builder = self
            .client
            .request(request.method.into(), &request.url)
            .header(header::ACCEPT, "application/json");

        if let Some(payload) = &request.payload {
            builder = builder.json(payload);
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(api_key) = &request.api_key {
            builder = builder.header("X-API-KEY", api_key);
        }
        if let Some(digest) = &request.integrity_digest {
            builder = builder.header("X-Digest", digest);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Success and error statuses alike are expected to carry an
        // envelope-shaped JSON body; anything else becomes a synthesized
        // failure carrying the status line.
        match serde_json::from_str::<Option<T>>(&body) {
            Ok(Some(value)) => Ok(value),
            Ok(None) | Err(_) => {
                warn!(
                    category = "dispatch",
                    method = %request.method,
                    url = %request.url,
                    status = status.as_u16(),
                    "response body was empty or not envelope-shaped"
                );
                Ok(T::failure(vec![status.to_string()], status.as_u16()))
            }
        }
    }
}
