//
//  baruwa-cli
//  api/domain/smarthosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Smarthosts: upstream relays outbound mail is routed through.
//!
//! The same record is used for domain smarthosts (here) and organization
//! smarthosts ([`crate::api::organization::smarthosts`]).

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// An outbound relay host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmartHost {
    pub id: i64,
    pub address: String,
    pub username: String,
    /// Write only; the server never returns it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    pub port: i64,
    pub require_tls: bool,
    pub enabled: bool,
    pub description: String,
}

impl ToForm for SmartHost {
    fn to_form(&self) -> Form {
        Form::new()
            .text("address", self.address.as_str())
            .text("username", self.username.as_str())
            .text_nonempty("password", &self.password)
            .int("port", self.port)
            .flag("require_tls", self.require_tls)
            .flag("enabled", self.enabled)
            .text("description", self.description.as_str())
    }
}

impl BaruwaClient {
    pub async fn get_domain_smarthosts(
        &self,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<SmartHost>, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.get(&format!("domains/smarthosts/{domain_id}"), opts).await
    }

    pub async fn get_domain_smarthost(&self, domain_id: i64, server_id: i64) -> Result<SmartHost, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        self.get(&format!("domains/smarthosts/{domain_id}/{server_id}"), None).await
    }

    pub async fn create_domain_smarthost<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<SmartHost, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        self.post(&format!("domains/smarthosts/{domain_id}"), &server.to_form())
            .await
    }

    pub async fn update_domain_smarthost<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<SmartHost, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.put(&format!("domains/smarthosts/{domain_id}/{}", server.id), &server.to_form())
            .await
    }

    pub async fn delete_domain_smarthost<'a>(
        &self,
        domain_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.delete(
            &format!("domains/smarthosts/{domain_id}/{}", server.id),
            Some(&server.to_form()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;

    #[tokio::test]
    async fn test_domain_smarthost_validation() {
        let client = test_client("http://127.0.0.1:1");

        let err = client.get_domain_smarthosts(0, None).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
        let err = client.get_domain_smarthost(1, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "The serverID param should be > 0");
        let err = client.update_domain_smarthost(1, None::<&SmartHost>).await.unwrap_err();
        assert_eq!(err.to_string(), "The server param is required");
        let err = client.delete_domain_smarthost(1, &SmartHost::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "The server.ID param should be > 0");
    }

    #[tokio::test]
    async fn test_domain_smarthost_cursor() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/domains/smarthosts/1")
            .match_query(mockito::Matcher::UrlEncoded("page".into(), "2".into()))
            .with_status(200)
            .with_body(r#"{"items": [{"id": 2, "address": "192.168.1.150", "port": 25}], "meta": {"total": 3}}"#)
            .create_async()
            .await;

        let client = test_client(&server.url());
        let opts = client.page_options("domains/smarthosts/1", 2).unwrap();
        let page = client.get_domain_smarthosts(1, Some(&opts)).await.unwrap();
        assert_eq!(page.items[0].address, "192.168.1.150");
        mock.assert_async().await;
    }

    #[test]
    fn test_password_only_sent_when_set() {
        let host = SmartHost {
            address: "relay.example.com".to_string(),
            port: 587,
            ..Default::default()
        };
        assert_eq!(host.to_form().get("password"), None);
        assert!(!serde_json::to_string(&host).unwrap().contains("password"));
    }
}
