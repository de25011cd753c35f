//
//  baruwa-cli
//  api/user/aliases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Alias addresses: extra addresses that deliver to a user's mailbox.

use serde::{Deserialize, Serialize};

use crate::api::common::{ensure_id, messages, required, ApiError};
use crate::api::form::{Form, ToForm};
use crate::api::BaruwaClient;

/// An alternative address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AliasAddress {
    pub id: i64,
    pub address: String,
    pub enabled: bool,
}

impl ToForm for AliasAddress {
    fn to_form(&self) -> Form {
        Form::new()
            .text("address", self.address.as_str())
            .flag("enabled", self.enabled)
    }
}

impl BaruwaClient {
    pub async fn get_alias_address(&self, alias_id: i64) -> Result<AliasAddress, ApiError> {
        ensure_id(alias_id, messages::ALIAS_ID)?;
        self.get(&format!("aliasaddresses/{alias_id}"), None).await
    }

    /// Adds an alias to the user `user_id`.
    pub async fn create_alias_address<'a>(
        &self,
        user_id: i64,
        alias: impl Into<Option<&'a AliasAddress>>,
    ) -> Result<AliasAddress, ApiError> {
        ensure_id(user_id, messages::USER_ID)?;
        let alias = required(alias, messages::ALIAS_PARAM)?;
        self.post(&format!("aliasaddresses/{user_id}"), &alias.to_form()).await
    }

    pub async fn update_alias_address<'a>(
        &self,
        alias: impl Into<Option<&'a AliasAddress>>,
    ) -> Result<AliasAddress, ApiError> {
        let alias = required(alias, messages::ALIAS_PARAM)?;
        ensure_id(alias.id, messages::ALIAS_SID)?;
        self.put(&format!("aliasaddresses/{}", alias.id), &alias.to_form()).await
    }

    /// Removes an alias. The server expects the alias fields in the body.
    pub async fn delete_alias_address<'a>(&self, alias: impl Into<Option<&'a AliasAddress>>) -> Result<(), ApiError> {
        let alias = required(alias, messages::ALIAS_PARAM)?;
        ensure_id(alias.id, messages::ALIAS_SID)?;
        self.delete(&format!("aliasaddresses/{}", alias.id), Some(&alias.to_form()))
            .await
    }
}
