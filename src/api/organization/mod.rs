//
//  baruwa-cli
//  api/organization/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organizations: groups of domains managed together.
//!
//! # Overview
//!
//! - [`Organization`] / [`OrganizationForm`]: the organization record
//! - [`smarthosts`]: outbound relays under `organizations/smarthosts`
//! - [`fallback_servers`]: fallback delivery under `failbackservers`
//! - [`relays`]: authenticated outbound relay settings under `relays`

pub mod fallback_servers;
pub mod relays;
pub mod smarthosts;

pub use fallback_servers::FallbackServer;
pub use relays::RelaySetting;

use serde::{Deserialize, Serialize};

use super::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse, NamedRef};
use super::form::{Form, ToForm};
use super::BaruwaClient;

/// An organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: i64,
    pub name: String,
    pub domains: Vec<NamedRef>,
    pub admins: Vec<NamedRef>,
}

/// Fields sent when creating or updating an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationForm {
    pub id: i64,
    pub name: String,
    /// Ids of member domains.
    pub domains: Vec<i64>,
    /// Ids of administrator accounts.
    pub admins: Vec<i64>,
}

impl OrganizationForm {
    pub fn from_organization(org: &Organization) -> Self {
        Self {
            id: org.id,
            name: org.name.clone(),
            domains: org.domains.iter().map(|d| d.id).collect(),
            admins: org.admins.iter().map(|a| a.id).collect(),
        }
    }
}

impl ToForm for OrganizationForm {
    fn to_form(&self) -> Form {
        Form::new()
            .text("name", self.name.as_str())
            .ids("domains", &self.domains)
            .ids("admins", &self.admins)
    }
}

impl BaruwaClient {
    pub async fn get_organizations(&self, opts: Option<&ListOptions>) -> Result<ListResponse<Organization>, ApiError> {
        self.get("organizations", opts).await
    }

    pub async fn get_organization(&self, org_id: i64) -> Result<Organization, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        self.get(&format!("organizations/{org_id}"), None).await
    }

    pub async fn create_organization<'a>(
        &self,
        form: impl Into<Option<&'a OrganizationForm>>,
    ) -> Result<Organization, ApiError> {
        let form = required(form, messages::FORM_PARAM)?;
        self.post("organizations", &form.to_form()).await
    }

    pub async fn update_organization<'a>(
        &self,
        form: impl Into<Option<&'a OrganizationForm>>,
    ) -> Result<Organization, ApiError> {
        let form = required(form, messages::FORM_PARAM)?;
        ensure_id(form.id, messages::FORM_SID)?;
        self.put(&format!("organizations/{}", form.id), &form.to_form()).await
    }

    pub async fn delete_organization(&self, org_id: i64) -> Result<(), ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        self.delete(&format!("organizations/{org_id}"), None).await
    }
}
