//
//  baruwa-cli
//  api/domain/auth_servers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! External authentication servers of a domain.
//!
//! Users of a domain can log in against an IMAP, POP3, LDAP or RADIUS
//! server. LDAP and RADIUS servers carry extra settings, see
//! [`super::ldap`] and [`super::radius`].

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// An authentication server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthServer {
    pub id: i64,
    pub address: String,
    /// 1 = POP3, 2 = IMAP, 3 = SMTP, 4 = RADIUS, 5 = LDAP.
    pub protocol: i64,
    pub port: i64,
    pub enabled: bool,
    /// Strip the domain part from the login before authenticating.
    pub split_address: bool,
    pub user_map_template: String,
}

impl ToForm for AuthServer {
    fn to_form(&self) -> Form {
        Form::new()
            .text("address", self.address.as_str())
            .int("protocol", self.protocol)
            .int("port", self.port)
            .flag("enabled", self.enabled)
            .flag("split_address", self.split_address)
            .text_nonempty("user_map_template", &self.user_map_template)
    }
}

impl BaruwaClient {
    pub async fn get_auth_servers(
        &self,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<AuthServer>, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.get(&format!("authservers/{domain_id}"), opts).await
    }

    pub async fn get_auth_server(&self, domain_id: i64, server_id: i64) -> Result<AuthServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        self.get(&format!("authservers/{domain_id}/{server_id}"), None).await
    }

    pub async fn create_auth_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a AuthServer>>,
    ) -> Result<AuthServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        self.post(&format!("authservers/{domain_id}"), &server.to_form()).await
    }

    pub async fn update_auth_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a AuthServer>>,
    ) -> Result<AuthServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.put(&format!("authservers/{domain_id}/{}", server.id), &server.to_form())
            .await
    }

    pub async fn delete_auth_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a AuthServer>>,
    ) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.delete(&format!("authservers/{domain_id}/{}", server.id), Some(&server.to_form()))
            .await
    }
}
