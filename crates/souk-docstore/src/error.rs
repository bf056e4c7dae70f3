// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for souk-docstore.

use thiserror::Error;

/// Result type using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the document store repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The store answered with a non-success status.
    #[error("document store request failed with status {status}: {body}")]
    Status {
        /// HTTP status observed on the response.
        status: u16,
        /// Error body returned by the store.
        body: String,
    },

    /// Network-level failure reaching the store.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Document body could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Status observed on the response, when this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
