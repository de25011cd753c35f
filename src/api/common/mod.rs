//
//  baruwa-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Baruwa REST API
//!
//! This module provides the types shared by every resource binding: the
//! unified error type, the JSON error envelope, pagination and the custom
//! scalar codecs used by the Baruwa wire format.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorResponse`] - The `{ "code": ..., "error": ... }` envelope
//! - Pagination types (re-exported from [`pagination`] submodule)
//! - Scalar codecs (re-exported from [`scalars`] submodule)
//!
//! # Example
//!
//! ```rust
//! use baruwa_cli::api::common::ApiError;
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(e) if e.status_code() == Some(404) => "missing".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//!
//! assert_eq!(describe(Ok(())), "ok");
//! ```

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

mod pagination;
mod scalars;

pub use pagination::*;
pub use scalars::*;

/// Stable validation messages.
///
/// These strings are part of the public contract: callers and tests match
/// on them, so they never change between releases.
pub mod messages {
    pub const ENDPOINT_REQUIRED: &str = "The endpoint param is required";
    pub const CLIENT_ID_REQUIRED: &str = "clientID is required";
    pub const CLIENT_SECRET_REQUIRED: &str = "secret is required";

    pub const USER_ID: &str = "The userID param should be > 0";
    pub const ALIAS_ID: &str = "The aliasID param should be > 0";
    pub const DOMAIN_ID: &str = "The domainID param should be > 0";
    pub const SERVER_ID: &str = "The serverID param should be > 0";
    pub const SETTINGS_ID: &str = "The settingsID param should be > 0";
    pub const ORGANIZATION_ID: &str = "The organizationID param should be > 0";
    pub const RELAY_ID: &str = "The relayID param should be > 0";

    pub const USER_SID: &str = "The user.ID param should be > 0";
    pub const ALIAS_SID: &str = "The alias.ID param should be > 0";
    pub const SERVER_SID: &str = "The server.ID param should be > 0";
    pub const SETTINGS_SID: &str = "The settings.ID param should be > 0";
    pub const DOMAIN_SID: &str = "The domain.ID param should be > 0";
    pub const FORM_SID: &str = "The form.ID param should be > 0";

    pub const USER_PARAM: &str = "The user param is required";
    pub const ALIAS_PARAM: &str = "The alias param is required";
    pub const SERVER_PARAM: &str = "The server param is required";
    pub const SETTINGS_PARAM: &str = "The settings param is required";
    pub const DOMAIN_PARAM: &str = "The domain param is required";
    pub const DOMAIN_NAME_PARAM: &str = "The domainName param is required";
    pub const FORM_PARAM: &str = "The form param is required";
}

/// Unified error type for all Baruwa API operations.
///
/// # Variants
///
/// | Variant | Raised by | Network I/O happened |
/// |---------|-----------|----------------------|
/// | `Config` | argument validation, constructor | No |
/// | `InvalidUrl` | endpoint, path or cursor parsing | No |
/// | `Transport` | DNS, connect, TLS, timeout | Yes |
/// | `Api` | non-2xx HTTP status | Yes |
/// | `Decode` | malformed JSON in a 2xx body | Yes |
///
/// Only [`ApiError::Api`] carries an HTTP status; use
/// [`status_code`](Self::status_code) rather than matching on the variant
/// when branching on 401/404 and friends.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Invalid or missing argument, detected before any request is sent.
    ///
    /// The message is one of the constants in [`messages`].
    #[error("{0}")]
    Config(&'static str),

    /// A base URL, resource path or pagination cursor failed to parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP round trip itself failed. Propagated unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("{method} {url}: {code} {message}")]
    Api {
        /// Numeric code from the error envelope, or the HTTP status.
        code: u16,
        /// Message from the error envelope, or the HTTP status line.
        message: String,
        /// Method of the request that failed.
        method: Method,
        /// URL of the request that failed.
        url: String,
    },

    /// A 2xx response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` when the server rejected the request with a non-2xx status.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Returns the status code of an [`ApiError::Api`] error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use baruwa_cli::api::common::ApiError;
    ///
    /// let err = ApiError::Config("The userID param should be > 0");
    /// assert_eq!(err.status_code(), None);
    /// assert!(!err.is_api_error());
    /// ```
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns the server-provided message of an [`ApiError::Api`] error.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Builds an [`ApiError::Api`] from a failed response.
    ///
    /// The status line is the starting point; a non-empty JSON body overrides
    /// whichever of `code` and `error` it carries.
    pub(crate) fn from_response(method: Method, url: &url::Url, status: StatusCode, body: &[u8]) -> Self {
        let mut code = status.as_u16();
        let mut message = status.to_string();

        if !body.is_empty() {
            if let Ok(envelope) = serde_json::from_slice::<ErrorResponse>(body) {
                if let Some(c) = envelope.code.and_then(|c| u16::try_from(c).ok()) {
                    code = c;
                }
                if let Some(m) = envelope.error.filter(|m| !m.is_empty()) {
                    message = m;
                }
            }
        }

        Self::Api {
            code,
            message,
            method,
            url: url.to_string(),
        }
    }
}

/// Fails with `message` unless `id` is a positive identifier.
pub(crate) fn ensure_id(id: i64, message: &'static str) -> Result<(), ApiError> {
    if id > 0 {
        Ok(())
    } else {
        Err(ApiError::Config(message))
    }
}

/// Unwraps a required struct argument, failing with `message` when absent.
pub(crate) fn required<'a, T: 'a>(
    value: impl Into<Option<&'a T>>,
    message: &'static str,
) -> Result<&'a T, ApiError> {
    value.into().ok_or(ApiError::Config(message))
}

/// A reference to another entity, as embedded in Baruwa responses.
///
/// ```json
/// {"id": 2, "name": "example.com"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub id: i64,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdOrRef {
    Id(i64),
    Ref { id: i64 },
}

/// Reads a list of ids sent either as plain integers or as `{"id": ..}`
/// objects. `null` reads as an empty list.
pub(crate) fn ids_or_refs<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    let items = Option::<Vec<IdOrRef>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(|item| match item {
            IdOrRef::Id(id) | IdOrRef::Ref { id } => id,
        })
        .collect())
}

/// The error envelope returned by the Baruwa API.
///
/// ```json
/// {"code": 404, "error": "Not Found"}
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    /// Application error code, usually equal to the HTTP status.
    #[serde(default)]
    pub code: Option<i64>,

    /// Human readable error message.
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> url::Url {
        url::Url::parse("https://baruwa.example.com/api/v1/users/1").unwrap()
    }

    #[test]
    fn test_error_from_json_envelope() {
        let err = ApiError::from_response(
            Method::GET,
            &url(),
            StatusCode::NOT_FOUND,
            br#"{"code":404,"error":"Not Found"}"#,
        );
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.api_message(), Some("Not Found"));
        assert_eq!(
            err.to_string(),
            "GET https://baruwa.example.com/api/v1/users/1: 404 Not Found"
        );
    }

    #[test]
    fn test_error_falls_back_to_status_line() {
        let err = ApiError::from_response(Method::DELETE, &url(), StatusCode::FORBIDDEN, b"");
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.api_message(), Some("403 Forbidden"));

        let err = ApiError::from_response(
            Method::GET,
            &url(),
            StatusCode::BAD_GATEWAY,
            b"<html>upstream down</html>",
        );
        assert_eq!(err.status_code(), Some(502));
        assert_eq!(err.api_message(), Some("502 Bad Gateway"));
    }

    #[test]
    fn test_partial_envelope_keeps_status() {
        let err = ApiError::from_response(
            Method::POST,
            &url(),
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"error":"name: This field is required."}"#,
        );
        assert_eq!(err.status_code(), Some(422));
        assert_eq!(err.api_message(), Some("name: This field is required."));
    }

    #[test]
    fn test_validation_helpers() {
        assert!(ensure_id(1, messages::USER_ID).is_ok());
        let err = ensure_id(0, messages::USER_ID).unwrap_err();
        assert_eq!(err.to_string(), "The userID param should be > 0");
        assert!(ensure_id(-3, messages::USER_ID).is_err());

        let value = NamedRef::default();
        assert!(required(&value, messages::FORM_PARAM).is_ok());
        let err = required(None::<&NamedRef>, messages::FORM_PARAM).unwrap_err();
        assert_eq!(err.to_string(), "The form param is required");
    }

    #[test]
    fn test_ids_or_refs() {
        #[derive(Deserialize)]
        struct Owner {
            #[serde(default, deserialize_with = "ids_or_refs")]
            organizations: Vec<i64>,
        }

        let owner: Owner = serde_json::from_str(r#"{"organizations": [1, {"id": 2, "name": "Baruwa"}]}"#).unwrap();
        assert_eq!(owner.organizations, vec![1, 2]);
        let owner: Owner = serde_json::from_str(r#"{"organizations": null}"#).unwrap();
        assert!(owner.organizations.is_empty());
        let owner: Owner = serde_json::from_str("{}").unwrap();
        assert!(owner.organizations.is_empty());
    }

    #[test]
    fn test_config_error_text_is_stable() {
        let err = ApiError::Config(messages::DOMAIN_PARAM);
        assert_eq!(err.to_string(), "The domain param is required");
        assert!(!err.is_api_error());
    }
}
