//
//  baruwa-cli
//  api/domain/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Domain API types and operations.
//!
//! A domain is a mail domain Baruwa accepts and filters mail for. Most
//! per-domain configuration lives in child resources addressed by the domain
//! id:
//!
//! | Module | Resource | Path |
//! |--------|----------|------|
//! | [`aliases`] | Alias domains | `domainaliases/{domain}` |
//! | [`delivery_servers`] | Delivery servers | `deliveryservers/{domain}`, `userdeliveryservers/{domain}` |
//! | [`auth_servers`] | External authentication servers | `authservers/{domain}` |
//! | [`ldap`] | LDAP settings of an auth server | `ldapsettings/{domain}/{server}` |
//! | [`radius`] | RADIUS settings of an auth server | `radiussettings/{domain}/{server}` |
//! | [`smarthosts`] | Outbound smarthosts | `domains/smarthosts/{domain}` |
//!
//! # Notes
//!
//! - Ids are positive; zero or negative ids are rejected before any request
//! - Update and delete take the full record so the body can be sent back

pub mod aliases;
pub mod auth_servers;
pub mod delivery_servers;
pub mod ldap;
pub mod radius;
pub mod smarthosts;

pub use aliases::{DomainAlias, DomainAliasForm};
pub use auth_servers::AuthServer;
pub use delivery_servers::{DeliveryServer, DeliveryServerForm};
pub use ldap::LdapSettings;
pub use radius::RadiusSettings;
pub use smarthosts::SmartHost;

use serde::{Deserialize, Serialize};

use super::common::{
    ensure_id, ids_or_refs, messages, required, ApiError, ListOptions, ListResponse, LocalFloat64, NamedRef,
};
use super::form::{Form, ToForm};
use super::BaruwaClient;

/// Summary of a server attached to a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerRef {
    pub id: i64,
    pub address: String,
    pub protocol: i64,
    pub port: i64,
}

/// A mail domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub site_url: String,
    /// Whether mail for the domain is processed. Sent as `status`.
    #[serde(rename = "status", alias = "enabled")]
    pub enabled: bool,
    pub accept_inbound: bool,
    pub discard_mail: bool,
    pub smtp_callout: bool,
    pub ldap_callout: bool,
    pub virus_checks: bool,
    pub virus_checks_at_smtp: bool,
    pub block_macros: bool,
    pub spam_checks: bool,
    pub spam_actions: i64,
    pub highspam_actions: i64,
    pub virus_actions: i64,
    pub low_score: LocalFloat64,
    pub high_score: LocalFloat64,
    pub message_size: String,
    pub delivery_mode: i64,
    pub language: String,
    pub timezone: String,
    pub report_every: i64,
    /// Ids of the organizations owning the domain.
    #[serde(deserialize_with = "ids_or_refs")]
    pub organizations: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<NamedRef>,
    #[serde(rename = "deliveryservers", skip_serializing_if = "Vec::is_empty")]
    pub delivery_servers: Vec<ServerRef>,
    #[serde(rename = "authservers", skip_serializing_if = "Vec::is_empty")]
    pub auth_servers: Vec<ServerRef>,
}

impl ToForm for Domain {
    fn to_form(&self) -> Form {
        Form::new()
            .text("name", self.name.as_str())
            .text("site_url", self.site_url.as_str())
            .flag("status", self.enabled)
            .flag("accept_inbound", self.accept_inbound)
            .flag("discard_mail", self.discard_mail)
            .flag("smtp_callout", self.smtp_callout)
            .flag("ldap_callout", self.ldap_callout)
            .flag("virus_checks", self.virus_checks)
            .flag("virus_checks_at_smtp", self.virus_checks_at_smtp)
            .flag("block_macros", self.block_macros)
            .flag("spam_checks", self.spam_checks)
            .int("spam_actions", self.spam_actions)
            .int("highspam_actions", self.highspam_actions)
            .int("virus_actions", self.virus_actions)
            .score("low_score", self.low_score)
            .score("high_score", self.high_score)
            .text_nonempty("message_size", &self.message_size)
            .int("delivery_mode", self.delivery_mode)
            .text_nonempty("language", &self.language)
            .text_nonempty("timezone", &self.timezone)
            .int("report_every", self.report_every)
            .ids("organizations", &self.organizations)
    }
}

/// Percent-encodes `value` for use as a single path segment.
///
/// The form serializer writes a space as `+`, which a path reads as a
/// literal plus; a literal `+` in the input is already `%2B`.
fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

impl BaruwaClient {
    pub async fn get_domains(&self, opts: Option<&ListOptions>) -> Result<ListResponse<Domain>, ApiError> {
        self.get("domains", opts).await
    }

    pub async fn get_domain(&self, domain_id: i64) -> Result<Domain, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.get(&format!("domains/{domain_id}"), None).await
    }

    /// Looks a domain up by its name instead of its id.
    pub async fn get_domain_by_name(&self, name: &str) -> Result<Domain, ApiError> {
        if name.is_empty() {
            return Err(ApiError::Config(messages::DOMAIN_NAME_PARAM));
        }
        self.get(&format!("domains/byname/{}", path_segment(name)), None)
            .await
    }

    pub async fn create_domain<'a>(&self, domain: impl Into<Option<&'a Domain>>) -> Result<Domain, ApiError> {
        let domain = required(domain, messages::DOMAIN_PARAM)?;
        self.post("domains", &domain.to_form()).await
    }

    pub async fn update_domain<'a>(&self, domain: impl Into<Option<&'a Domain>>) -> Result<Domain, ApiError> {
        let domain = required(domain, messages::DOMAIN_PARAM)?;
        ensure_id(domain.id, messages::DOMAIN_SID)?;
        self.put(&format!("domains/{}", domain.id), &domain.to_form()).await
    }

    pub async fn delete_domain(&self, domain_id: i64) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.delete(&format!("domains/{domain_id}"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;
    use mockito::Matcher;

    const DOMAINS_JSON: &str = r#"{
        "items": [{
            "highspam_actions": 2,
            "delivery_mode": 1,
            "virus_checks": true,
            "ldap_callout": false,
            "timezone": "Africa/Johannesburg",
            "spam_actions": 2,
            "id": 2,
            "deliveryservers": [{"address": "192.168.1.150", "id": 2, "port": 25}],
            "site_url": "https://mail.example.com",
            "authservers": [{"protocol": 2, "id": 2, "address": "mail.example.com"}],
            "report_every": 3,
            "aliases": [{"name": "mojo.example.com", "id": 2}],
            "status": true,
            "accept_inbound": true,
            "discard_mail": false,
            "virus_checks_at_smtp": true,
            "low_score": 10.0,
            "name": "example.com",
            "language": "en",
            "spam_checks": false,
            "smtp_callout": false,
            "message_size": "0",
            "high_score": 20.0,
            "virus_actions": 2
        }],
        "meta": {"total": 2},
        "links": {"pages": {
            "last": "http://baruwa.example.com/api/v1/domains?page=2",
            "next": "http://baruwa.example.com/api/v1/domains?page=2"
        }}
    }"#;

    #[tokio::test]
    async fn test_domain_validation() {
        let client = test_client("http://127.0.0.1:1");

        let err = client.get_domain(0).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
        let err = client.get_domain_by_name("").await.unwrap_err();
        assert_eq!(err.to_string(), "The domainName param is required");
        let err = client.create_domain(None::<&Domain>).await.unwrap_err();
        assert_eq!(err.to_string(), "The domain param is required");
        let err = client.update_domain(&Domain::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "The domain.ID param should be > 0");
        let err = client.delete_domain(0).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
    }

    #[tokio::test]
    async fn test_get_domains() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/domains")
            .with_status(200)
            .with_body(DOMAINS_JSON)
            .create_async()
            .await;

        let page = test_client(&server.url()).get_domains(None).await.unwrap();
        assert_eq!(page.meta.total, 2);
        assert_eq!(page.links.pages.first, "");
        assert_eq!(page.links.pages.next, "http://baruwa.example.com/api/v1/domains?page=2");

        let domain = &page.items[0];
        assert!(domain.enabled);
        assert_eq!(domain.low_score.to_string(), "10.0");
        assert_eq!(domain.delivery_servers[0].port, 25);
        assert_eq!(domain.aliases[0].name, "mojo.example.com");
    }

    #[tokio::test]
    async fn test_get_domains_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/domains")
            .with_status(500)
            .create_async()
            .await;

        let err = test_client(&server.url()).get_domains(None).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_get_domain_by_name() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/domains/byname/example.com")
            .with_status(200)
            .with_body(r#"{"id": 2, "name": "example.com", "status": true}"#)
            .create_async()
            .await;

        let domain = test_client(&server.url())
            .get_domain_by_name("example.com")
            .await
            .unwrap();
        assert_eq!(domain.id, 2);
        mock.assert_async().await;
    }

    #[test]
    fn test_domain_name_path_segment() {
        assert_eq!(path_segment("example.com"), "example.com");
        assert_eq!(path_segment("my domain+x/y"), "my%20domain%2Bx%2Fy");

        let request = test_client("http://baruwa.example.com")
            .new_request(
                reqwest::Method::GET,
                &crate::api::client::api_path(&format!("domains/byname/{}", path_segment("a b"))),
                None,
                None,
            )
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().path(), "/api/v1/domains/byname/a%20b");
    }

    #[tokio::test]
    async fn test_create_domain_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/domains")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("name".into(), "example.net".into()),
                Matcher::UrlEncoded("status".into(), "y".into()),
                Matcher::UrlEncoded("high_score".into(), "15.0".into()),
                Matcher::UrlEncoded("organizations".into(), "1".into()),
            ]))
            .with_status(201)
            .with_body(r#"{"id": 4, "name": "example.net", "status": true, "organizations": [{"id": 1, "name": "Baruwa"}]}"#)
            .create_async()
            .await;

        let domain = Domain {
            name: "example.net".to_string(),
            site_url: "https://mail.example.net".to_string(),
            enabled: true,
            high_score: LocalFloat64::new(15.0),
            organizations: vec![1],
            ..Default::default()
        };
        let form = domain.to_form();
        assert_eq!(form.get("discard_mail"), None);
        assert_eq!(form.get("id"), None);

        let created = test_client(&server.url()).create_domain(&domain).await.unwrap();
        assert_eq!(created.id, 4);
        assert_eq!(created.organizations, vec![1]);
        mock.assert_async().await;
    }
}
