// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the document store repository.

use std::time::Duration;

use crate::error::{Result, StoreError};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9000/souk";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for a [`DocumentStore`](crate::DocumentStore).
///
/// The base URL addresses one collection of documents, e.g.
/// `https://store.souk.example/baskets`; keys are appended as `{key}.json`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Collection base URL (no trailing `.json`).
    pub base_url: String,
    /// Store API key, passed as the `auth` query parameter when present.
    pub api_key: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl StoreConfig {
    /// Create a configuration for the given collection base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        StoreConfig {
            base_url: base_url.into(),
            ..StoreConfig::default()
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SOUK_DOCSTORE_URL`: collection base URL (default: local emulator)
    /// - `SOUK_DOCSTORE_API_KEY`: store API key (default: none)
    /// - `SOUK_DOCSTORE_TIMEOUT_MS`: request timeout in milliseconds (default: 10000)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("SOUK_DOCSTORE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let api_key = std::env::var("SOUK_DOCSTORE_API_KEY").ok();

        let timeout_ms: u64 = std::env::var("SOUK_DOCSTORE_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .map_err(|e| StoreError::Config(format!("invalid SOUK_DOCSTORE_TIMEOUT_MS: {}", e)))?;

        Ok(StoreConfig {
            base_url,
            api_key,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Set the collection base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the store API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
