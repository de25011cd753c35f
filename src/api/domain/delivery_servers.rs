//
//  baruwa-cli
//  api/domain/delivery_servers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Delivery servers of a domain.
//!
//! Baruwa keeps two lists per domain with the same shape:
//!
//! - **Domain delivery servers** (`deliveryservers`): where clean mail for
//!   the domain is relayed to
//! - **User delivery servers** (`userdeliveryservers`): per-user overrides
//!   used when users live on different backends
//!
//! Both share [`DeliveryServer`] and [`DeliveryServerForm`].

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse, NamedRef};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

const DOMAIN_SERVERS: &str = "deliveryservers";
const USER_SERVERS: &str = "userdeliveryservers";

/// A server mail is delivered to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryServer {
    pub id: i64,
    pub address: String,
    /// 1 = SMTP, 2 = LMTP.
    pub protocol: i64,
    pub port: i64,
    pub require_tls: bool,
    pub verification_only: bool,
    pub enabled: bool,
    pub domain: NamedRef,
}

/// Fields sent when creating, updating or deleting a delivery server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryServerForm {
    pub id: i64,
    pub address: String,
    pub protocol: i64,
    pub port: i64,
    pub require_tls: bool,
    pub verification_only: bool,
    pub enabled: bool,
}

impl DeliveryServerForm {
    pub fn from_server(server: &DeliveryServer) -> Self {
        Self {
            id: server.id,
            address: server.address.clone(),
            protocol: server.protocol,
            port: server.port,
            require_tls: server.require_tls,
            verification_only: server.verification_only,
            enabled: server.enabled,
        }
    }
}

impl ToForm for DeliveryServerForm {
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
    async fn list_delivery_servers(
        &self,
        kind: &str,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<DeliveryServer>, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.get(&format!("{kind}/{domain_id}"), opts).await
    }

    async fn get_delivery_server(&self, kind: &str, domain_id: i64, server_id: i64) -> Result<DeliveryServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        self.get(&format!("{kind}/{domain_id}/{server_id}"), None).await
    }

    async fn create_delivery_server(
        &self,
        kind: &str,
        domain_id: i64,
        server: Option<&DeliveryServerForm>,
    ) -> Result<DeliveryServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        self.post(&format!("{kind}/{domain_id}"), &server.to_form()).await
    }

    async fn update_delivery_server(
        &self,
        kind: &str,
        domain_id: i64,
        server: Option<&DeliveryServerForm>,
    ) -> Result<DeliveryServer, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.put(&format!("{kind}/{domain_id}/{}", server.id), &server.to_form())
            .await
    }

    async fn delete_delivery_server(
        &self,
        kind: &str,
        domain_id: i64,
        server: Option<&DeliveryServerForm>,
    ) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.delete(&format!("{kind}/{domain_id}/{}", server.id), Some(&server.to_form()))
            .await
    }

    pub async fn get_domain_delivery_servers(
        &self,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<DeliveryServer>, ApiError> {
        self.list_delivery_servers(DOMAIN_SERVERS, domain_id, opts).await
    }

    pub async fn get_domain_delivery_server(&self, domain_id: i64, server_id: i64) -> Result<DeliveryServer, ApiError> {
        self.get_delivery_server(DOMAIN_SERVERS, domain_id, server_id).await
    }

    pub async fn create_domain_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<DeliveryServer, ApiError> {
        self.create_delivery_server(DOMAIN_SERVERS, domain_id, server.into()).await
    }

    pub async fn update_domain_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<DeliveryServer, ApiError> {
        self.update_delivery_server(DOMAIN_SERVERS, domain_id, server.into()).await
    }

    pub async fn delete_domain_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<(), ApiError> {
        self.delete_delivery_server(DOMAIN_SERVERS, domain_id, server.into()).await
    }

    pub async fn get_user_delivery_servers(
        &self,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<DeliveryServer>, ApiError> {
        self.list_delivery_servers(USER_SERVERS, domain_id, opts).await
    }

    pub async fn get_user_delivery_server(&self, domain_id: i64, server_id: i64) -> Result<DeliveryServer, ApiError> {
        self.get_delivery_server(USER_SERVERS, domain_id, server_id).await
    }

    pub async fn create_user_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<DeliveryServer, ApiError> {
        self.create_delivery_server(USER_SERVERS, domain_id, server.into()).await
    }

    pub async fn update_user_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<DeliveryServer, ApiError> {
        self.update_delivery_server(USER_SERVERS, domain_id, server.into()).await
    }

    pub async fn delete_user_delivery_server<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a DeliveryServerForm>>,
    ) -> Result<(), ApiError> {
        self.delete_delivery_server(USER_SERVERS, domain_id, server.into()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;

    const SERVERS_JSON: &str = r#"{
        "items": [{
            "domain": {"name": "example.com", "id": 2},
            "protocol": 1,
            "enabled": true,
            "verification_only": false,
            "id": 2,
            "address": "192.168.1.150",
            "port": 25
        }],
        "meta": {"total": 1}
    }"#;

    #[tokio::test]
    async fn test_delivery_server_validation() {
        let client = test_client("http://127.0.0.1:1");
        let form = DeliveryServerForm::default();

        let err = client.get_domain_delivery_servers(0, None).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
        let err = client.get_user_delivery_server(1, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "The serverID param should be > 0");
        let err = client
            .create_domain_delivery_server(1, None::<&DeliveryServerForm>)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The server param is required");
        let err = client.update_user_delivery_server(1, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "The server.ID param should be > 0");
        let err = client.delete_domain_delivery_server(0, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
    }

    #[tokio::test]
    async fn test_get_domain_delivery_servers() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/deliveryservers/1")
            .with_status(200)
            .with_body(SERVERS_JSON)
            .create_async()
            .await;

        let page = test_client(&server.url())
            .get_domain_delivery_servers(1, None)
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].domain.name, "example.com");
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_user_delivery_servers_use_own_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/v1/userdeliveryservers/1/2")
            .match_body("address=192.168.1.150&protocol=1&port=25&enabled=y")
            .with_status(200)
            .with_body(r#"{"id": 2, "address": "192.168.1.150", "port": 25, "enabled": true}"#)
            .create_async()
            .await;

        let form = DeliveryServerForm {
            id: 2,
            address: "192.168.1.150".to_string(),
            protocol: 1,
            port: 25,
            enabled: true,
            ..Default::default()
        };
        let updated = test_client(&server.url())
            .update_user_delivery_server(1, &form)
            .await
            .unwrap();
        assert!(updated.enabled);
        mock.assert_async().await;
    }
}
