// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! The uniform response envelope returned by every service-facing call.

use serde::{Deserialize, Serialize};

const NOT_ACCEPTABLE: u16 = 406;

/// UI routing hint attached to an envelope.
///
/// Serialized as a bare integer on the wire; unknown integers decode to
/// [`DisplayType::Redirect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum DisplayType {
    /// Navigate to `redirect_url`.
    #[default]
    Redirect,
    /// Modal with a continue button (next service is called on dismiss).
    ModalContinue,
    /// Modal with an OK button; the page reloads on dismiss.
    ModalReload,
    /// Modal that triggers the header service on dismiss.
    ModalHeader,
    /// Navigate without showing any message.
    SilentRedirect,
    /// Show the error image.
    ErrorImage,
}

impl From<i32> for DisplayType {
    fn from(value: i32) -> Self {
        match value {
            1 => DisplayType::ModalContinue,
            2 => DisplayType::ModalReload,
            3 => DisplayType::ModalHeader,
            4 => DisplayType::SilentRedirect,
            5 => DisplayType::ErrorImage,
            _ => DisplayType::Redirect,
        }
    }
}

impl From<DisplayType> for i32 {
    fn from(display_type: DisplayType) -> Self {
        match display_type {
            DisplayType::Redirect => 0,
            DisplayType::ModalContinue => 1,
            DisplayType::ModalReload => 2,
            DisplayType::ModalHeader => 3,
            DisplayType::SilentRedirect => 4,
            DisplayType::ErrorImage => 5,
        }
    }
}

/// Marker payload for envelopes that carry no business data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContent;

/// The wire-level result wrapper shared by all inter-service endpoints.
///
/// Wire-visible JSON fields are `data`, `messageList`, `errors`, `displayType`
/// and `redirectURL`. The transport status and the success flag travel
/// out-of-band on the HTTP status line and are never part of the JSON body.
///
/// Envelopes are built through the closed constructor family below, never by
/// filling fields ad hoc; each call site asserts a specific success/failure
/// shape. Invariant: `is_successful == true` exactly when `errors` is absent
/// or empty. [`Envelope::fail_with_partial_data`] is the single named
/// exception that carries both `data` and `errors`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    /// Business payload; present only on success paths that carry a result
    /// (plus the partial-data failure path).
    pub data: Option<T>,
    /// Mirrors the HTTP status line; bookkeeping only, never serialized.
    #[serde(skip)]
    pub status_code: u16,
    /// Success flag; bookkeeping only, never serialized.
    #[serde(skip)]
    pub is_successful: bool,
    /// Human-readable success/informational messages, in order.
    #[serde(rename = "messageList")]
    pub message_list: Option<Vec<String>>,
    /// Human-readable error strings; populated only on failure.
    pub errors: Option<Vec<String>>,
    /// How the receiving UI should present this result.
    #[serde(rename = "displayType")]
    pub display_type: DisplayType,
    /// Consulted when `display_type` implies navigation.
    #[serde(rename = "redirectURL")]
    pub redirect_url: String,
}

impl<T> Envelope<T> {
    fn base(status_code: u16, is_successful: bool) -> Self {
        Envelope {
            data: None,
            status_code,
            is_successful,
            message_list: None,
            errors: None,
            display_type: DisplayType::default(),
            redirect_url: String::new(),
        }
    }

    /// Success carrying a payload and no messages.
    pub fn success(data: T, status_code: u16) -> Self {
        Envelope {
            data: Some(data),
            message_list: Some(Vec::new()),
            ..Self::base(status_code, true)
        }
    }

    /// Success carrying a payload and a single message.
    pub fn success_with_message(data: T, status_code: u16, message: impl Into<String>) -> Self {
        Self::success_with_messages(data, status_code, vec![message.into()])
    }

    /// Success carrying a payload and an explicit message list.
    pub fn success_with_messages(data: T, status_code: u16, messages: Vec<String>) -> Self {
        Envelope {
            data: Some(data),
            message_list: Some(messages),
            ..Self::base(status_code, true)
        }
    }

    /// Success with no payload, e.g. "delete accepted".
    pub fn success_no_data(status_code: u16) -> Self {
        Self::success_no_data_with_messages(status_code, Vec::new())
    }

    /// Success with no payload and an explicit message list.
    pub fn success_no_data_with_messages(status_code: u16, messages: Vec<String>) -> Self {
        Envelope {
            message_list: Some(messages),
            ..Self::base(status_code, true)
        }
    }

    /// Generic failure.
    pub fn fail(errors: Vec<String>, status_code: u16) -> Self {
        Envelope {
            errors: Some(errors),
            ..Self::base(status_code, false)
        }
    }

    /// Single-error convenience form of [`Envelope::fail`].
    pub fn fail_with_error(error: impl Into<String>, status_code: u16) -> Self {
        Self::fail(vec![error.into()], status_code)
    }

    /// Business-rule failure that instructs the UI to redirect or show a
    /// modal. The status is pinned to 406 to signal "not a transport error".
    pub fn fail_with_routing(
        errors: Vec<String>,
        display_type: DisplayType,
        redirect_url: impl Into<String>,
    ) -> Self {
        Envelope {
            errors: Some(errors),
            display_type,
            redirect_url: redirect_url.into(),
            ..Self::base(NOT_ACCEPTABLE, false)
        }
    }

    /// Failure that still returns a payload alongside the errors, pinned to
    /// 406 like [`Envelope::fail_with_routing`].
    ///
    /// This is the one deliberate exception to the data/errors exclusion
    /// invariant; UI consumers rely on receiving both, so it must stay a
    /// distinct construction path.
    pub fn fail_with_partial_data(
        data: T,
        errors: Vec<String>,
        display_type: DisplayType,
    ) -> Self {
        Envelope {
            data: Some(data),
            errors: Some(errors),
            display_type,
            ..Self::base(NOT_ACCEPTABLE, false)
        }
    }

    /// Failure used by authentication flows, which need both a real HTTP
    /// status and a UI routing hint.
    pub fn fail_with_routing_and_status(
        errors: Vec<String>,
        status_code: u16,
        display_type: DisplayType,
    ) -> Self {
        Envelope {
            errors: Some(errors),
            display_type,
            ..Self::base(status_code, false)
        }
    }
}

// Hand-written so the out-of-band fields come back consistent: a parsed
// envelope derives its success flag from `errors`, and its status is owned by
// the HTTP status line (status_code stays 0 until the caller consults it).
impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(bound(deserialize = "T: Deserialize<'de>"))]
        struct Wire<T> {
            #[serde(default)]
            data: Option<T>,
            #[serde(rename = "messageList", default)]
            message_list: Option<Vec<String>>,
            #[serde(default)]
            errors: Option<Vec<String>>,
            #[serde(rename = "displayType", default)]
            display_type: DisplayType,
            #[serde(rename = "redirectURL", default)]
            redirect_url: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        let is_successful = wire.errors.as_ref().is_none_or(|errors| errors.is_empty());
        Ok(Envelope {
            data: wire.data,
            status_code: 0,
            is_successful,
            message_list: wire.message_list,
            errors: wire.errors,
            display_type: wire.display_type,
            redirect_url: wire.redirect_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_round_trip() {
        for raw in 0..=5 {
            let display_type = DisplayType::from(raw);
            assert_eq!(i32::from(display_type), raw);
        }
    }

    #[test]
    fn test_display_type_unknown_decodes_to_redirect() {
        assert_eq!(DisplayType::from(42), DisplayType::Redirect);
        assert_eq!(DisplayType::from(-1), DisplayType::Redirect);
    }
}
