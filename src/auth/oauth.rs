//
//  baruwa-cli
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth 2.0 Password Grant
//!
//! Baruwa issues API tokens through the OAuth 2.0 password grant. The client
//! id and secret are sent with HTTP Basic auth to `oauth2/token`, which lives
//! at the server root rather than under `/api/v1`.
//!
//! ## Flow
//!
//! 1. **Token Exchange**: POST `grant_type=password` with Basic credentials
//! 2. **API Access**: Build a [`BaruwaClient`] with the returned access token
//!
//! Tokens are not refreshed automatically. When a call starts failing with
//! 401, exchange again.
//!
//! ## Example
//!
//! ```rust,no_run
//! use baruwa_cli::api::BaruwaClient;
//!
//! # async fn example() -> Result<(), baruwa_cli::api::common::ApiError> {
//! let bootstrap = BaruwaClient::new("https://baruwa.example.com", "", None)?;
//! let token = bootstrap.get_access_token("client-id", "client-secret").await?;
//!
//! let client = BaruwaClient::new("https://baruwa.example.com", &token.access_token, None)?;
//! # let _ = client;
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AuthCredential;
use crate::api::common::{messages, ApiError, ExpirationTime};
use crate::api::BaruwaClient;

/// Path of the token endpoint, relative to the server root.
pub const TOKEN_PATH: &str = "oauth2/token";

/// Body of every token request.
const PASSWORD_GRANT: &str = "grant_type=password";

/// Response of a successful token exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Token for the `Authorization: Bearer` header.
    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub refresh_token: String,

    /// Usually `Bearer`.
    #[serde(default)]
    pub token_type: String,

    /// Granted scope. Some servers misspell the key as `score`.
    #[serde(default, alias = "score")]
    pub scope: String,

    /// Lifetime of the access token in seconds.
    #[serde(default)]
    pub expires_in: ExpirationTime,
}

impl BaruwaClient {
    /// Exchanges client credentials for an access token.
    ///
    /// The request carries HTTP Basic auth and no bearer token.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] with `clientID is required` or
    ///   `secret is required` before any request is sent
    /// - [`ApiError::Api`] when the server rejects the credentials
    pub async fn get_access_token(&self, client_id: &str, secret: &str) -> Result<TokenResponse, ApiError> {
        if client_id.is_empty() {
            return Err(ApiError::Config(messages::CLIENT_ID_REQUIRED));
        }
        if secret.is_empty() {
            return Err(ApiError::Config(messages::CLIENT_SECRET_REQUIRED));
        }

        debug!(client_id, "Requesting access token");

        let request = self.new_request(Method::POST, TOKEN_PATH, None, Some(PASSWORD_GRANT.to_string()))?;
        let request = AuthCredential::basic(client_id, secret).apply_to_request(request);

        let response = self.execute(request).await?;
        Self::decode(response).await
    }
}
