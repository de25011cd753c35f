//
//  baruwa-cli
//  cli/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Argument groups shared by domain and organization commands.
//!
//! Smarthosts look the same under a domain and an organization; delivery
//! servers and fallback servers carry the same connection fields.

use clap::Args;

use crate::api::domain::{DeliveryServerForm, SmartHost};
use crate::api::organization::FallbackServer;

use super::toggle;

/// Smarthost fields for `create`
#[derive(Args, Debug, Clone)]
pub struct SmartHostFields {
    #[arg(long)]
    pub address: String,

    #[arg(long, default_value_t = 25)]
    pub port: i64,

    #[arg(long, default_value = "")]
    pub username: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub description: String,

    /// Enable this smarthost
    #[arg(long)]
    pub enable: bool,

    #[arg(long)]
    pub require_tls: bool,
}

impl SmartHostFields {
    pub fn to_smarthost(&self) -> SmartHost {
        SmartHost {
            address: self.address.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            port: self.port,
            require_tls: self.require_tls,
            enabled: self.enable,
            description: self.description.clone(),
            ..Default::default()
        }
    }
}

/// Smarthost fields for `update`; only given flags change the record
#[derive(Args, Debug, Clone)]
pub struct SmartHostChanges {
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub port: Option<i64>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_require_tls")]
    pub require_tls: bool,

    #[arg(long)]
    pub disable_require_tls: bool,
}

impl SmartHostChanges {
    pub fn apply(&self, host: &mut SmartHost) {
        if let Some(address) = &self.address {
            host.address.clone_from(address);
        }
        if let Some(username) = &self.username {
            host.username.clone_from(username);
        }
        if let Some(password) = &self.password {
            host.password.clone_from(password);
        }
        if let Some(description) = &self.description {
            host.description.clone_from(description);
        }
        host.port = self.port.unwrap_or(host.port);
        host.enabled = toggle(self.enable, self.disable).unwrap_or(host.enabled);
        host.require_tls = toggle(self.require_tls, self.disable_require_tls).unwrap_or(host.require_tls);
    }
}

/// Delivery/fallback server fields for `create`
#[derive(Args, Debug, Clone)]
pub struct ServerFields {
    #[arg(long)]
    pub address: String,

    /// 1 = SMTP, 2 = LMTP
    #[arg(long, default_value_t = 1)]
    pub protocol: i64,

    #[arg(long, default_value_t = 25)]
    pub port: i64,

    /// Enable this server
    #[arg(long)]
    pub enable: bool,

    #[arg(long)]
    pub require_tls: bool,

    #[arg(long)]
    pub verification_only: bool,
}

impl ServerFields {
    pub fn to_delivery_server(&self) -> DeliveryServerForm {
        DeliveryServerForm {
            address: self.address.clone(),
            protocol: self.protocol,
            port: self.port,
            require_tls: self.require_tls,
            verification_only: self.verification_only,
            enabled: self.enable,
            ..Default::default()
        }
    }

    pub fn to_fallback_server(&self) -> FallbackServer {
        FallbackServer {
            address: self.address.clone(),
            protocol: self.protocol,
            port: self.port,
            require_tls: self.require_tls,
            verification_only: self.verification_only,
            enabled: self.enable,
            ..Default::default()
        }
    }
}

/// Delivery/fallback server fields for `update`
#[derive(Args, Debug, Clone)]
pub struct ServerChanges {
    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub protocol: Option<i64>,

    #[arg(long)]
    pub port: Option<i64>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_require_tls")]
    pub require_tls: bool,

    #[arg(long)]
    pub disable_require_tls: bool,

    #[arg(long, conflicts_with = "disable_verification_only")]
    pub verification_only: bool,

    #[arg(long)]
    pub disable_verification_only: bool,
}

impl ServerChanges {
    pub fn apply_delivery(&self, server: &mut DeliveryServerForm) {
        if let Some(address) = &self.address {
            server.address.clone_from(address);
        }
        server.protocol = self.protocol.unwrap_or(server.protocol);
        server.port = self.port.unwrap_or(server.port);
        server.enabled = toggle(self.enable, self.disable).unwrap_or(server.enabled);
        server.require_tls = toggle(self.require_tls, self.disable_require_tls).unwrap_or(server.require_tls);
        server.verification_only =
            toggle(self.verification_only, self.disable_verification_only).unwrap_or(server.verification_only);
    }

    pub fn apply_fallback(&self, server: &mut FallbackServer) {
        if let Some(address) = &self.address {
            server.address.clone_from(address);
        }
        server.protocol = self.protocol.unwrap_or(server.protocol);
        server.port = self.port.unwrap_or(server.port);
        server.enabled = toggle(self.enable, self.disable).unwrap_or(server.enabled);
        server.require_tls = toggle(self.require_tls, self.disable_require_tls).unwrap_or(server.require_tls);
        server.verification_only =
            toggle(self.verification_only, self.disable_verification_only).unwrap_or(server.verification_only);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(flatten)]
        changes: ServerChanges,
    }

    #[test]
    fn test_server_changes_keep_unset_fields() {
        let harness = Harness::try_parse_from(["t", "--port", "587", "--disable-require-tls"]).unwrap();
        let mut server = DeliveryServerForm {
            id: 4,
            address: "192.168.1.20".to_string(),
            protocol: 1,
            port: 25,
            require_tls: true,
            enabled: true,
            ..Default::default()
        };
        harness.changes.apply_delivery(&mut server);
        assert_eq!(server.port, 587);
        assert!(!server.require_tls);
        assert!(server.enabled);
        assert_eq!(server.address, "192.168.1.20");
    }

    #[test]
    fn test_smarthost_changes_password() {
        let mut host = SmartHost {
            id: 2,
            address: "192.168.1.150".to_string(),
            ..Default::default()
        };
        let changes = SmartHostChanges {
            address: None,
            port: None,
            username: Some("andrew".to_string()),
            password: Some("s3cr3t".to_string()),
            description: None,
            enable: true,
            disable: false,
            require_tls: false,
            disable_require_tls: false,
        };
        changes.apply(&mut host);
        assert_eq!(host.username, "andrew");
        assert_eq!(host.password, "s3cr3t");
        assert!(host.enabled);
    }
}
