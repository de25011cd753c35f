//
//  baruwa-cli
//  api/organization/fallback_servers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Fallback servers: where an organization's mail goes when its delivery
//! servers are unreachable.
//!
//! # Notes
//!
//! - The server spells the resource `failbackservers`
//! - Listing and creating are scoped by organization id; get, update and
//!   delete address the server by its own id

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse, NamedRef};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// A fallback delivery server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackServer {
    pub id: i64,
    pub address: String,
    pub protocol: i64,
    pub port: i64,
    pub require_tls: bool,
    pub verification_only: bool,
    pub enabled: bool,
    pub organization: NamedRef,
}

impl ToForm for FallbackServer {
    fn to_form(&self) -> Form {
        Form::new()
            .text("address", self.address.as_str())
            .int("protocol", self.protocol)
            .int("port", self.port)
            .flag("require_tls", self.require_tls)
            .flag("verification_only", self.verification_only)
            .flag("enabled", self.enabled)
    }
}

impl BaruwaClient {
    pub async fn get_fallback_servers(
        &self,
        org_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<FallbackServer>, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        self.get(&format!("failbackservers/{org_id}"), opts).await
    }

    pub async fn get_fallback_server(&self, server_id: i64) -> Result<FallbackServer, ApiError> {
        ensure_id(server_id, messages::SERVER_ID)?;
        self.get(&format!("failbackservers/{server_id}"), None).await
    }

    pub async fn create_fallback_server<'a>(
        &self,
        org_id: i64,
        server: impl Into<Option<&'a FallbackServer>>,
    ) -> Result<FallbackServer, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        self.post(&format!("failbackservers/{org_id}"), &server.to_form()).await
    }

    pub async fn update_fallback_server<'a>(
        &self,
        server: impl Into<Option<&'a FallbackServer>>,
    ) -> Result<FallbackServer, ApiError> {
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.put(&format!("failbackservers/{}", server.id), &server.to_form()).await
    }

    pub async fn delete_fallback_server<'a>(&self, server: impl Into<Option<&'a FallbackServer>>) -> Result<(), ApiError> {
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.delete(&format!("failbackservers/{}", server.id), Some(&server.to_form()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;

    #[tokio::test]
    async fn test_fallback_server_validation() {
        let client = test_client("http://127.0.0.1:1");

        let err = client.get_fallback_servers(0, None).await.unwrap_err();
        assert_eq!(err.to_string(), "The organizationID param should be > 0");
        let err = client.get_fallback_server(0).await.unwrap_err();
        assert_eq!(err.to_string(), "The serverID param should be > 0");
        let err = client
            .create_fallback_server(0, &FallbackServer::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The organizationID param should be > 0");
        let err = client.update_fallback_server(None::<&FallbackServer>).await.unwrap_err();
        assert_eq!(err.to_string(), "The server param is required");
        let err = client.delete_fallback_server(&FallbackServer::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "The server.ID param should be > 0");
    }

    #[tokio::test]
    async fn test_get_fallback_servers() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/failbackservers/1")
            .with_status(200)
            .with_body(
                r#"{
                    "items": [{
                        "organization": {"name": "Baruwa", "id": 2},
                        "protocol": 1,
                        "enabled": true,
                        "id": 2,
                        "address": "192.168.1.150",
                        "port": 25
                    }],
                    "meta": {"total": 1}
                }"#,
            )
            .create_async()
            .await;

        let page = test_client(&server.url()).get_fallback_servers(1, None).await.unwrap();
        assert_eq!(page.items[0].organization.name, "Baruwa");
    }

    #[tokio::test]
    async fn test_update_fallback_server_uses_own_id() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/failbackservers/7")
            .with_status(200)
            .with_body(r#"{"id": 7, "address": "192.168.1.151", "port": 25}"#)
            .create_async()
            .await;

        let fallback = FallbackServer {
            id: 7,
            address: "192.168.1.151".to_string(),
            port: 25,
            ..Default::default()
        };
        let updated = test_client(&server.url())
            .update_fallback_server(&fallback)
            .await
            .unwrap();
        assert_eq!(updated.address, "192.168.1.151");
        mock.assert_async().await;
    }
}
