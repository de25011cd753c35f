//
//  baruwa-cli
//  api/domain/aliases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Alias domains: extra domain names that share a domain's settings.

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse, NamedRef};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// An alias domain as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainAlias {
    pub id: i64,
    pub name: String,
    /// Sent as `status` by some server versions.
    #[serde(alias = "status")]
    pub enabled: bool,
    pub accept_inbound: bool,
    /// The parent domain.
    pub domain: NamedRef,
}

/// Fields sent when creating, updating or deleting an alias domain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainAliasForm {
    pub id: i64,
    /// Id of the parent domain.
    pub domain: i64,
    pub name: String,
    pub enabled: bool,
    pub accept_inbound: bool,
}

impl DomainAliasForm {
    pub fn from_alias(alias: &DomainAlias) -> Self {
        Self {
            id: alias.id,
            domain: alias.domain.id,
            name: alias.name.clone(),
            enabled: alias.enabled,
            accept_inbound: alias.accept_inbound,
        }
    }
}

impl ToForm for DomainAliasForm {
    fn to_form(&self) -> Form {
        let form = Form::new()
            .text("name", self.name.as_str())
            .flag("status", self.enabled)
            .flag("accept_inbound", self.accept_inbound);
        if self.domain > 0 {
            form.int("domain", self.domain)
        } else {
            form
        }
    }
}

impl BaruwaClient {
    pub async fn get_domain_aliases(
        &self,
        domain_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<DomainAlias>, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        self.get(&format!("domainaliases/{domain_id}"), opts).await
    }

    pub async fn get_domain_alias(&self, domain_id: i64, alias_id: i64) -> Result<DomainAlias, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        ensure_id(alias_id, messages::ALIAS_ID)?;
        self.get(&format!("domainaliases/{domain_id}/{alias_id}"), None).await
    }

    pub async fn create_domain_alias<'a>(
        &self,
        domain_id: i64,
        alias: impl Into<Option<&'a DomainAliasForm>>,
    ) -> Result<DomainAlias, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let alias = required(alias, messages::ALIAS_PARAM)?;
        self.post(&format!("domainaliases/{domain_id}"), &alias.to_form()).await
    }

    pub async fn update_domain_alias<'a>(
        &self,
        domain_id: i64,
        alias: impl Into<Option<&'a DomainAliasForm>>,
    ) -> Result<DomainAlias, ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let alias = required(alias, messages::ALIAS_PARAM)?;
        ensure_id(alias.id, messages::ALIAS_SID)?;
        self.put(&format!("domainaliases/{domain_id}/{}", alias.id), &alias.to_form())
            .await
    }

    pub async fn delete_domain_alias<'a>(
        &self,
        domain_id: i64,
        alias: impl Into<Option<&'a DomainAliasForm>>,
    ) -> Result<(), ApiError> {
        ensure_id(domain_id, messages::DOMAIN_ID)?;
        let alias = required(alias, messages::ALIAS_PARAM)?;
        ensure_id(alias.id, messages::ALIAS_SID)?;
        self.delete(&format!("domainaliases/{domain_id}/{}", alias.id), Some(&alias.to_form()))
            .await
    }
}
