//
//  baruwa-cli
//  api/organization/relays.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Relay settings: hosts or SMTP-AUTH accounts allowed to send outbound
//! mail through Baruwa on behalf of an organization.

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, LocalFloat64};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// An outbound relay permission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaySetting {
    pub id: i64,
    /// Host address allowed to relay. Empty for SMTP-AUTH relays.
    pub address: String,
    /// SMTP-AUTH username. Empty for host relays.
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password1: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password2: String,
    pub description: String,
    pub enabled: bool,
    pub require_tls: bool,
    pub block_macros: bool,
    pub spam_actions: i64,
    pub highspam_actions: i64,
    /// Messages per minute.
    pub ratelimit: i64,
    pub low_score: LocalFloat64,
    pub high_score: LocalFloat64,
}

impl ToForm for RelaySetting {
    fn to_form(&self) -> Form {
        Form::new()
            .text("address", self.address.as_str())
            .text("username", self.username.as_str())
            .text_nonempty("password1", &self.password1)
            .text_nonempty("password2", &self.password2)
            .text("description", self.description.as_str())
            .flag("enabled", self.enabled)
            .flag("require_tls", self.require_tls)
            .flag("block_macros", self.block_macros)
            .int("spam_actions", self.spam_actions)
            .int("highspam_actions", self.highspam_actions)
            .int("ratelimit", self.ratelimit)
            .score("low_score", self.low_score)
            .score("high_score", self.high_score)
    }
}

impl BaruwaClient {
    pub async fn get_relay_setting(&self, relay_id: i64) -> Result<RelaySetting, ApiError> {
        ensure_id(relay_id, messages::RELAY_ID)?;
        self.get(&format!("relays/{relay_id}"), None).await
    }

    /// Adds a relay setting to the organization `org_id`.
    pub async fn create_relay_setting<'a>(
        &self,
        org_id: i64,
        relay: impl Into<Option<&'a RelaySetting>>,
    ) -> Result<RelaySetting, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        let relay = required(relay, messages::SERVER_PARAM)?;
        self.post(&format!("relays/{org_id}"), &relay.to_form()).await
    }

    pub async fn update_relay_setting<'a>(
        &self,
        relay: impl Into<Option<&'a RelaySetting>>,
    ) -> Result<RelaySetting, ApiError> {
        let relay = required(relay, messages::SERVER_PARAM)?;
        ensure_id(relay.id, messages::SERVER_SID)?;
        self.put(&format!("relays/{}", relay.id), &relay.to_form()).await
    }

    pub async fn delete_relay_setting<'a>(&self, relay: impl Into<Option<&'a RelaySetting>>) -> Result<(), ApiError> {
        let relay = required(relay, messages::SERVER_PARAM)?;
        ensure_id(relay.id, messages::SERVER_SID)?;
        self.delete(&format!("relays/{}", relay.id), Some(&relay.to_form())).await
    }
}
