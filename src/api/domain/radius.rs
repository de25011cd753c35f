//
//  baruwa-cli
//  api/domain/radius.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! RADIUS settings of an authentication server.

use serde::{Deserialize, Serialize};

use super::ldap::AuthServerRef;
use crate::api::common::{ensure_id, messages, required, ApiError};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// RADIUS shared secret and timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusSettings {
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secret: String,
    /// Seconds.
    pub timeout: i64,
    #[serde(rename = "authserver")]
    pub auth_server: AuthServerRef,
}

impl ToForm for RadiusSettings {
    fn to_form(&self) -> Form {
        Form::new()
            .text_nonempty("secret", &self.secret)
            .int("timeout", self.timeout)
    }
}

impl BaruwaClient {
    pub async fn get_radius_settings(
        &self,
        domain_id: i64,
        server_id: i64,
        settings_id: i64,
    ) -> Result<RadiusSettings, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        ensure_id(settings_id, messages::SETTINGS_ID)?;
        self.get(&format!("radiussettings/{domain_id}/{server_id}/{settings_id}"), None)
            .await
    }

    pub async fn create_radius_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a RadiusSettings>>,
    ) -> Result<RadiusSettings, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        self.post(&format!("radiussettings/{domain_id}/{server_id}"), &settings.to_form())
            .await
    }

    pub async fn update_radius_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a RadiusSettings>>,
    ) -> Result<RadiusSettings, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        ensure_id(settings.id, messages::SETTINGS_SID)?;
        self.put(
            &format!("radiussettings/{domain_id}/{server_id}/{}", settings.id),
            &settings.to_form(),
        )
        .await
    }

    pub async fn delete_radius_settings<'a>(
        &self,
        domain_id: i64,
        server_id: i64,
        settings: impl Into<Option<&'a RadiusSettings>>,
    ) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        let settings = required(settings, messages::SETTINGS_PARAM)?;
        ensure_id(settings.id, messages::SETTINGS_SID)?;
        self.delete(
            &format!("radiussettings/{domain_id}/{server_id}/{}", settings.id),
            Some(&settings.to_form()),
        )
        .await
    }
}
