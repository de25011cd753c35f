//
//  baruwa-cli
//  api/domain/ldap.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! LDAP settings of an authentication server.
//!
//! Settings are addressed by domain id, auth server id and settings id:
//! `ldapsettings/{domain}/{server}/{settings}`.

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// Reference to the auth server owning a settings record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthServerRef {
    pub id: i64,
}

/// LDAP lookup settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LdapSettings {
    pub id: i64,
    pub basedn: String,
    pub nameattribute: String,
    pub emailattribute: String,
    pub binddn: String,
    /// Write only; the server never returns it.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bindpw: String,
    pub usetls: bool,
    pub usesearch: bool,
    pub searchfilter: String,
    pub search_scope: String,
    pub emailsearchfilter: String,
    pub emailsearch_scope: String,
    #[serde(rename = "authserver")]
    pub auth_server: AuthServerRef,
}

impl ToForm for LdapSettings {
    fn to_form(&self) -> Form {
        Form::new()
            .text("basedn", self.basedn.as_str())
            .text("nameattribute", self.nameattribute.as_str())
            .text("emailattribute", self.emailattribute.as_str())
            .text("binddn", self.binddn.as_str())
            .text_nonempty("bindpw", &self.bindpw)
            .flag("usetls", self.usetls)
            .flag("usesearch", self.usesearch)
            .text("searchfilter", self.searchfilter.as_str())
            .text_nonempty("search_scope", &self.search_scope)
            .text("emailsearchfilter", self.emailsearchfilter.as_str())
            .text_nonempty("emailsearch_scope", &self.emailsearch_scope)
    }
}

fn check_parents(domain_id: i64, server_id: i64) -> Result<(), ApiError> {
    ensure_id(domain_id, messages::DOMAIN_ID)?;
    ensure_id(server_id, messages::SERVER_ID)
}

impl BaruwaClient {
    pub async fn get_ldap_settings(
        &self,
        domain_id: i64,
        server_id: i64,
        settings_id: i64,
    ) -> Result<LdapSettings, ApiError> {
        check_parents(domain_id, server_id)?;
        ensure_id(settings_id, messages::SETTINGS_ID)?;
        self.get(&format!("ldapsettings/{domain_id}/{server_id}/{settings_id}"), None)
            .await
    }

    pub async fn create_ldap_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a LdapSettings>>,
    ) -> Result<LdapSettings, ApiError> {
        check_parents(domain_id, server_id)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        self.post(&format!("ldapsettings/{domain_id}/{server_id}"), &settings.to_form())
            .await
    }

    pub async fn update_ldap_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a LdapSettings>>,
    ) -> Result<LdapSettings, ApiError> {
        check_parents(domain_id, server_id)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        ensure_id(settings.id, messages::SETTINGS_SID)?;
        self.put(
            &format!("ldapsettings/{domain_id}/{server_id}/{}", settings.id),
            &settings.to_form(),
        )
        .await
    }

    pub async fn delete_ldap_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a LdapSettings>>,
    ) -> Result<(), ApiError> {
        check_parents(domain_id, server_id)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        ensure_id(settings.id, messages::SETTINGS_SID)?;
        self.delete(
            &format!("ldapsettings/{domain_id}/{server_id}/{}", settings.id),
            Some(&settings.to_form()),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::test_client;

    #[tokio::test]
    async fn test_ldap_validation() {
        let client = test_client("http://127.0.0.1:1");

        let err = client.get_ldap_settings(0, 1, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "The domainID param should be > 0");
        let err = client.get_ldap_settings(1, 0, 1).await.unwrap_err();
        assert_eq!(err.to_string(), "The serverID param should be > 0");
        let err = client.get_ldap_settings(1, 1, 0).await.unwrap_err();
        assert_eq!(err.to_string(), "The settingsID param should be > 0");
        let err = client.create_ldap_settings(1, 1, None::<&LdapSettings>).await.unwrap_err();
        assert_eq!(err.to_string(), "The settings param is required");
        let err = client
            .update_ldap_settings(1, 1, &LdapSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "The settings.ID param should be > 0");
    }

    #[tokio::test]
    async fn test_get_ldap_settings() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/ldapsettings/2/4/2")
            .with_status(200)
            .with_body(
                r#"{
                    "binddn": "uid=readonly-admin,ou=Users,dc=example,dc=com",
                    "emailsearchfilter": "",
                    "emailsearch_scope": "subtree",
                    "searchfilter": "",
                    "search_scope": "subtree",
                    "authserver": {"id": 4},
                    "basedn": "ou=Users,dc=example,dc=com",
                    "usetls": true,
                    "usesearch": false,
                    "emailattribute": "mail",
                    "id": 2,
                    "nameattribute": "uid"
                }"#,
            )
            .create_async()
            .await;

        let settings = test_client(&server.url()).get_ldap_settings(2, 4, 2).await.unwrap();
        assert_eq!(settings.auth_server.id, 4);
        assert!(settings.usetls);
        assert_eq!(settings.bindpw, "");

        let form = settings.to_form();
        assert_eq!(form.get("bindpw"), None);
        assert_eq!(form.get("searchfilter"), Some(""));
    }
}
