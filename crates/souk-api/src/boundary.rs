// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Fault translation at the service boundary.

use axum::http::StatusCode;
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::envelope::{Envelope, NoContent};

/// Message surfaced to clients outside the development profile.
pub const GENERIC_FAULT_MESSAGE: &str = "an unexpected error occurred";

/// Typed fault raised by service code and translated at the HTTP boundary.
///
/// Unlike the dispatcher's contained failures, faults propagate with `?` up
/// to the boundary, where [`FaultTranslator::translate`] flattens them into
/// an envelope response.
#[derive(Debug, Error)]
pub enum ApiFault {
    /// A referenced resource was absent where one was required.
    #[error("missing reference: {0}")]
    MissingReference(String),
    /// The requested operation is not valid in the current state.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// Request validation failed; one entry per violated field.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// Anything else.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Runtime profile controlling how much fault detail reaches clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Profile {
    /// Underlying fault messages are surfaced to clients.
    Development,
    /// Clients only ever see [`GENERIC_FAULT_MESSAGE`].
    #[default]
    Production,
}

impl Profile {
    /// Read the profile from `SOUK_PROFILE` ("development"/"dev" opt in;
    /// anything else is production).
    pub fn from_env() -> Self {
        match std::env::var("SOUK_PROFILE") {
            Ok(value) if matches!(value.to_lowercase().as_str(), "development" | "dev") => {
                Profile::Development
            }
            _ => Profile::Production,
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Profile::Development
    }
}

/// Catch-all mapper from [`ApiFault`] to an HTTP status plus envelope body,
/// installed once per service at its pipeline entry point.
#[derive(Debug, Clone, Copy)]
pub struct FaultTranslator {
    profile: Profile,
}

impl FaultTranslator {
    pub fn new(profile: Profile) -> Self {
        FaultTranslator { profile }
    }

    /// Translator configured from `SOUK_PROFILE`.
    pub fn from_env() -> Self {
        Self::new(Profile::from_env())
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Map a fault to its HTTP status and envelope body.
    ///
    /// Validation faults are written through verbatim, one error entry per
    /// field violation, regardless of profile. Every other fault gets a
    /// status from the precedence table (missing reference 404, invalid
    /// operation 400, anything else 500) and a message that is only detailed
    /// in the development profile. Each branch logs the full fault
    /// server-side either way.
    ///
    /// The returned tuple implements `IntoResponse`, so axum handlers can
    /// return it directly.
    pub fn translate(&self, fault: &ApiFault) -> (StatusCode, Json<Envelope<NoContent>>) {
        if let ApiFault::Validation(errors) = fault {
            error!(
                category = "validation",
                count = errors.len(),
                error = %fault,
                "request validation failed"
            );
            let status = StatusCode::BAD_REQUEST;
            return (status, Json(Envelope::fail(errors.clone(), status.as_u16())));
        }

        let status = match fault {
            ApiFault::MissingReference(_) => StatusCode::NOT_FOUND,
            ApiFault::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!(
            category = "boundary",
            status = status.as_u16(),
            error = %fault,
            "unhandled fault at service boundary"
        );

        let message = if self.profile.is_development() {
            fault.to_string()
        } else {
            GENERIC_FAULT_MESSAGE.to_string()
        };
        (status, Json(Envelope::fail_with_error(message, status.as_u16())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display() {
        let fault = ApiFault::MissingReference("account 42".to_string());
        assert_eq!(fault.to_string(), "missing reference: account 42");

        let fault = ApiFault::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(fault.to_string(), "validation failed: a; b");
    }

    #[test]
    fn test_fault_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiFault>();
    }

    #[test]
    fn test_internal_fault_from_anyhow() {
        let fault = ApiFault::from(anyhow::anyhow!("db pool exhausted"));
        assert_eq!(fault.to_string(), "db pool exhausted");
    }
}
