// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Generic CRUD over the REST document store.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Generic repository mapping CRUD verbs onto the document store's REST
/// conventions.
///
/// One repository addresses one collection; the entity type `T` only needs
/// to be JSON-(de)serializable, nothing more is enforced. The repository
/// keeps no local state between calls: every verb is one HTTP round trip and
/// the store alone decides write ordering.
pub struct DocumentStore<T> {
    client: reqwest::Client,
    config: StoreConfig,
    _entity: PhantomData<fn() -> T>,
}

impl<T> DocumentStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a repository with its own pooled client.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(DocumentStore {
            client,
            config,
            _entity: PhantomData,
        })
    }

    /// Create a repository configured from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env()?)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Fetch the document stored under `key`.
    ///
    /// Returns `None` when the store answers with a JSON `null` body, which
    /// is how it reports an absent key.
    pub async fn get(&self, key: &str) -> Result<Option<T>> {
        let response = self.execute(self.client.get(self.document_url(key))).await?;
        let body = response.text().await.map_err(StoreError::Transport)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch every document in the collection, keyed by store key.
    ///
    /// An empty collection comes back as a JSON `null` body and yields an
    /// empty map.
    pub async fn get_all(&self) -> Result<HashMap<String, T>> {
        let response = self.execute(self.client.get(self.collection_url())).await?;
        let body = response.text().await.map_err(StoreError::Transport)?;
        let entries: Option<HashMap<String, T>> = serde_json::from_str(&body)?;
        Ok(entries.unwrap_or_default())
    }

    /// Store a new document; the store assigns and returns the key.
    ///
    /// The generated key arrives in the response's `name` field; an absent
    /// field yields an empty string.
    pub async fn create(&self, entity: &T) -> Result<String> {
        let response = self
            .execute(self.client.post(self.collection_url()).json(entity))
            .await?;
        let body = response.text().await.map_err(StoreError::Transport)?;
        let value: Value = serde_json::from_str(&body)?;
        let key = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        debug!(category = "docstore", key = %key, "document created");
        Ok(key)
    }

    /// Replace the document under `key` wholesale (no merge semantics).
    pub async fn update(&self, key: &str, entity: &T) -> Result<()> {
        self.execute(self.client.put(self.document_url(key)).json(entity))
            .await?;
        Ok(())
    }

    /// Delete the document under `key`.
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.execute(self.client.delete(self.document_url(key)))
            .await?;
        Ok(())
    }

    fn collection_url(&self) -> String {
        format!("{}.json", self.config.base_url.trim_end_matches('/'))
    }

    fn document_url(&self, key: &str) -> String {
        format!("{}/{}.json", self.config.base_url.trim_end_matches('/'), key)
    }

    /// Shared send-and-check path for every verb: attach the store
    /// credential, execute, and turn any non-success status into a typed
    /// fault carrying the status and the error body.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = match &self.config.api_key {
            Some(api_key) => request.query(&[("auth", api_key.as_str())]),
            None => request,
        };

        let response = request.send().await.map_err(StoreError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                category = "docstore",
                status = status.as_u16(),
                body = %body,
                "document store request failed"
            );
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
