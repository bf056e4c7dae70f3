// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Generic repository over souk's REST document store.
//!
//! The store is schemaless and addressed by REST conventions: documents live
//! under `{base}/{key}.json`, creation POSTs to `{base}.json` and the store
//! answers with a generated key. There are no secondary indexes and no
//! multi-document atomicity; the store is the sole arbiter of last-write-wins.
//!
//! Failures propagate as [`StoreError`] values rather than being flattened
//! into response envelopes here: callers sit below the service boundary and
//! need to distinguish, say, a missing document from a conflict before
//! translating for their clients.
//!
//! # Example
//!
//! ```no_run
//! use serde::{Deserialize, Serialize};
//! use souk_docstore::{DocumentStore, StoreConfig};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Basket {
//!     account_id: u64,
//!     items: Vec<String>,
//! }
//!
//! # async fn example() -> Result<(), souk_docstore::StoreError> {
//! let config = StoreConfig::new("https://store.souk.example/baskets")
//!     .with_api_key("store-key");
//! let store: DocumentStore<Basket> = DocumentStore::new(config)?;
//!
//! let key = store
//!     .create(&Basket { account_id: 42, items: vec![] })
//!     .await?;
//! let basket = store.get(&key).await?;
//! assert!(basket.is_some());
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod repository;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use repository::DocumentStore;
