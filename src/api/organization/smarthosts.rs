//
//  baruwa-cli
//  api/organization/smarthosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization smarthosts, sharing [`SmartHost`] with domains.

use crate::api::common::{ensure_id, messages, required, ApiError, ListOptions, ListResponse};
use crate::api::domain::SmartHost;
use crate::api::form::ToForm;
use crate::api::BaruwaClient;

impl BaruwaClient {
    pub async fn get_org_smarthosts(
        &self,
        org_id: i64,
        opts: Option<&ListOptions>,
    ) -> Result<ListResponse<SmartHost>, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        self.get(&format!("organizations/smarthosts/{org_id}"), opts).await
    }

    pub async fn get_org_smarthost(&self, org_id: i64, server_id: i64) -> Result<SmartHost, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        ensure_id(server_id, messages::SERVER_ID)?;
        self.get(&format!("organizations/smarthosts/{org_id}/{server_id}"), None)
            .await
    }

    pub async fn create_org_smarthost<'a>(
        &self,
        org_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<SmartHost, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        self.post(&format!("organizations/smarthosts/{org_id}"), &server.to_form())
            .await
    }

    pub async fn update_org_smarthost<'a>(
        &self,
        org_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<SmartHost, ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.put(
            &format!("organizations/smarthosts/{org_id}/{}", server.id),
            &server.to_form(),
        )
        .await
    }

    pub async fn delete_org_smarthost<'a>(
        &self,
        org_id: i64,
        server: impl Into<Option<&'a SmartHost>>,
    ) -> Result<(), ApiError> {
        ensure_id(org_id, messages::ORGANIZATION_ID)?;
        let server = required(server, messages::SERVER_PARAM)?;
        ensure_id(server.id, messages::SERVER_SID)?;
        self.delete(
            &format!("organizations/smarthosts/{org_id}/{}", server.id),
            Some(&server.to_form()),
        )
        .await
    }
}
