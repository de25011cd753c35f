//
//  baruwa-cli
//  api/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Gateway health and mail counters.

use serde::{Deserialize, Serialize};

use super::common::ApiError;
use super::BaruwaClient;

/// Message counters for the reporting window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailTotals {
    pub spam: i64,
    pub highspam: i64,
    pub lowspam: i64,
    pub infected: i64,
    pub clean: i64,
    pub total: i64,
    pub virii: i64,
}

/// Response of `GET /api/v1/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    /// Messages waiting in the inbound queue.
    pub inbound: i64,
    /// `true` when every scanning service is up.
    pub status: bool,
    pub total: MailTotals,
    /// Messages waiting in the outbound queue.
    pub outbound: i64,
}

impl BaruwaClient {
    pub async fn get_system_status(&self) -> Result<SystemStatus, ApiError> {
        self.get("status", None).await
    }
}
