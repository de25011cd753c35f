//
//  baruwa-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Table rendering for list commands.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::api::domain::{AuthServer, DeliveryServer, Domain, DomainAlias, SmartHost};
use crate::api::organization::{FallbackServer, Organization};
use crate::api::user::User;
use crate::api::common::NamedRef;

/// A record that can be shown as one table row.
pub trait TableOutput {
    fn headers() -> &'static [&'static str];

    fn row(&self) -> Vec<String>;
}

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn build_table<T: TableOutput>(items: &[T], color: bool) -> Table {
    let mut table = create_table();
    if color {
        table.set_header(T::headers().iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    } else {
        table.set_header(T::headers().to_vec());
    }
    for item in items {
        table.add_row(item.row());
    }
    table
}

pub fn format_bool(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

fn names(refs: &[NamedRef]) -> String {
    refs.iter().map(|r| r.name.as_str()).collect::<Vec<_>>().join(", ")
}

fn protocol_name(protocol: i64) -> String {
    match protocol {
        1 => "SMTP".to_string(),
        2 => "LMTP".to_string(),
        other => other.to_string(),
    }
}

impl TableOutput for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "EMAIL", "NAME", "ACTIVE", "DOMAINS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.email.clone(),
            format!("{} {}", self.firstname, self.lastname).trim().to_string(),
            format_bool(self.active),
            names(&self.domains),
        ]
    }
}

impl TableOutput for Domain {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ENABLED", "INBOUND", "SPAM CHECKS", "SCORES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            format_bool(self.enabled),
            format_bool(self.accept_inbound),
            format_bool(self.spam_checks),
            format!("{} / {}", self.low_score, self.high_score),
        ]
    }
}

impl TableOutput for DomainAlias {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ENABLED", "INBOUND", "DOMAIN"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            format_bool(self.enabled),
            format_bool(self.accept_inbound),
            self.domain.name.clone(),
        ]
    }
}

impl TableOutput for DeliveryServer {
    fn headers() -> &'static [&'static str] {
        &["ID", "ADDRESS", "PROTOCOL", "PORT", "TLS", "ENABLED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.address.clone(),
            protocol_name(self.protocol),
            self.port.to_string(),
            format_bool(self.require_tls),
            format_bool(self.enabled),
        ]
    }
}

impl TableOutput for AuthServer {
    fn headers() -> &'static [&'static str] {
        &["ID", "ADDRESS", "PROTOCOL", "PORT", "ENABLED"]
    }

    fn row(&self) -> Vec<String> {
        let protocol = match self.protocol {
            1 => "POP3",
            2 => "IMAP",
            3 => "SMTP",
            4 => "RADIUS",
            5 => "LDAP",
            _ => "",
        };
        vec![
            self.id.to_string(),
            self.address.clone(),
            protocol.to_string(),
            self.port.to_string(),
            format_bool(self.enabled),
        ]
    }
}

impl TableOutput for SmartHost {
    fn headers() -> &'static [&'static str] {
        &["ID", "ADDRESS", "PORT", "USERNAME", "TLS", "ENABLED", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.address.clone(),
            self.port.to_string(),
            self.username.clone(),
            format_bool(self.require_tls),
            format_bool(self.enabled),
            self.description.clone(),
        ]
    }
}

impl TableOutput for FallbackServer {
    fn headers() -> &'static [&'static str] {
        &["ID", "ADDRESS", "PROTOCOL", "PORT", "TLS", "ENABLED", "ORGANIZATION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.address.clone(),
            protocol_name(self.protocol),
            self.port.to_string(),
            format_bool(self.require_tls),
            format_bool(self.enabled),
            self.organization.name.clone(),
        ]
    }
}

impl TableOutput for Organization {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "DOMAINS", "ADMINS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            names(&self.domains),
            names(&self.admins),
        ]
    }
}
