//
//  baruwa-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Baruwa uses two authentication schemes:
//!
//! - **Bearer token**: sent on every resource call as
//!   `Authorization: Bearer <token>`.
//! - **HTTP Basic**: client id and secret, used only for the OAuth2
//!   password-grant exchange that produces the bearer token.
//!
//! ## Module Structure
//!
//! - [`oauth`]: The `oauth2/token` exchange and its response type
//!
//! ## Example
//!
//! ```rust
//! use baruwa_cli::auth::AuthCredential;
//!
//! let credential = AuthCredential::bearer("access-token");
//! assert!(credential.is_bearer());
//! ```

mod oauth;

pub use oauth::*;

use reqwest::RequestBuilder;

/// Credentials attached to an outgoing request.
#[derive(Clone)]
pub enum AuthCredential {
    /// OAuth2 bearer token for resource calls.
    Bearer {
        /// The access token. May be empty; the server rejects the call then.
        token: String,
    },
    /// Client id and secret for the token exchange.
    Basic {
        client_id: String,
        secret: String,
    },
}

impl AuthCredential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    pub fn basic(client_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Basic {
            client_id: client_id.into(),
            secret: secret.into(),
        }
    }

    pub fn is_bearer(&self) -> bool {
        matches!(self, Self::Bearer { .. })
    }

    /// Adds the matching `Authorization` header to the request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Bearer { token } => request.bearer_auth(token),
            Self::Basic { client_id, secret } => request.basic_auth(client_id, Some(secret)),
        }
    }
}

impl std::fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer { .. } => f.debug_struct("Bearer").field("token", &"<redacted>").finish(),
            Self::Basic { client_id, .. } => f
                .debug_struct("Basic")
                .field("client_id", client_id)
                .field("secret", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let client = reqwest::Client::new();
        let request = AuthCredential::bearer("test-token")
            .apply_to_request(client.get("https://baruwa.example.com/"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer test-token"
        );
    }

    #[test]
    fn test_basic_header() {
        let client = reqwest::Client::new();
        let request = AuthCredential::basic("id", "secret")
            .apply_to_request(client.post("https://baruwa.example.com/oauth2/token"))
            .build()
            .unwrap();
        // base64("id:secret")
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Basic aWQ6c2VjcmV0"
        );
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let rendered = format!("{:?}", AuthCredential::basic("id", "hunter2"));
        assert!(!rendered.contains("hunter2"));
        let rendered = format!("{:?}", AuthCredential::bearer("tok"));
        assert!(!rendered.contains("tok\""));
    }
}
