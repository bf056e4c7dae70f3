// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Souk service core
//!
//! Shared building blocks for every souk service that talks HTTP+JSON to its
//! peers: the uniform response envelope, the outbound request descriptor, the
//! typed dispatcher that turns a descriptor into an envelope-shaped value, and
//! the fault translation installed at each service's HTTP boundary.
//!
//! # Architecture
//!
//! Two failure policies coexist on purpose:
//! - The [`Dispatcher`] absorbs every failure (network, status, body shape) and
//!   always returns a value. Business code branches on
//!   [`Envelope::is_successful`], never on a thrown error.
//! - The service boundary propagates typed faults ([`ApiFault`]) which the
//!   [`FaultTranslator`] maps to an HTTP status plus an envelope body.
//!
//! # Example
//!
//! ```no_run
//! use souk_api::{Dispatcher, Envelope, RequestDescriptor};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new()?;
//!
//! let request = RequestDescriptor::post("https://accounts.souk.internal/api/v1/accounts")
//!     .with_payload(serde_json::json!({"email": "new@customer.example"}))
//!     .with_bearer_token("access-token");
//!
//! let response: Envelope<serde_json::Value> = dispatcher.send(&request).await;
//! if response.is_successful {
//!     println!("created: {:?}", response.data);
//! } else {
//!     println!("call failed: {:?}", response.errors);
//! }
//! # Ok(())
//! # }
//! ```

mod boundary;
mod dispatch;
mod envelope;
mod request;

pub use boundary::{ApiFault, FaultTranslator, GENERIC_FAULT_MESSAGE, Profile};
pub use dispatch::{DEFAULT_TIMEOUT, Dispatcher, Enveloped};
pub use envelope::{DisplayType, Envelope, NoContent};
pub use request::{ApiMethod, RequestDescriptor};
