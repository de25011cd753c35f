//
//  baruwa-cli
//  cli/organization.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization commands: the organizations themselves, their smarthosts,
//! fallback servers and relay settings.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::LocalFloat64;
use crate::api::organization::{OrganizationForm, RelaySetting};

use super::fields::{ServerChanges, ServerFields, SmartHostChanges, SmartHostFields};
use super::{toggle, GlobalOptions, PageArgs};

/// Manage organizations
#[derive(Args, Debug)]
pub struct OrganizationCommand {
    #[command(subcommand)]
    pub command: OrganizationSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrganizationSubcommand {
    /// Show detailed information of an organization
    Show(IdArgs),

    /// Create a new organization
    Create(CreateArgs),

    /// Update an organization
    Update(UpdateArgs),

    /// Delete an organization
    Delete(IdArgs),

    /// Manage organization smarthosts
    #[command(name = "smarthost")]
    SmartHost(SmartHostCommand),

    /// List organization smarthosts
    #[command(name = "smarthosts")]
    SmartHosts(OrgListArgs),

    /// Manage fallback servers
    #[command(name = "fallbackserver")]
    FallbackServer(FallbackServerCommand),

    /// List fallback servers
    #[command(name = "fallbackservers")]
    FallbackServers(OrgListArgs),

    /// Manage relay settings
    #[command(name = "relaysetting")]
    RelaySetting(RelayCommand),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Record ID
    #[arg(long)]
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct OrgListArgs {
    /// Organization ID
    #[arg(long = "organization-id", visible_alias = "id")]
    pub organization_id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    /// Member domain ID (repeatable)
    #[arg(long = "domain")]
    pub domains: Vec<i64>,

    /// Administrator account ID (repeatable)
    #[arg(long = "admin")]
    pub admins: Vec<i64>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Organization ID
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    /// Replace the member domains (repeatable)
    #[arg(long = "domain")]
    pub domains: Vec<i64>,

    /// Replace the administrators (repeatable)
    #[arg(long = "admin")]
    pub admins: Vec<i64>,
}

impl UpdateArgs {
    fn apply(&self, form: &mut OrganizationForm) {
        if let Some(name) = &self.name {
            form.name.clone_from(name);
        }
        if !self.domains.is_empty() {
            form.domains.clone_from(&self.domains);
        }
        if !self.admins.is_empty() {
            form.admins.clone_from(&self.admins);
        }
    }
}

/// Record id plus the organization it belongs to
#[derive(Args, Debug)]
pub struct ChildArgs {
    #[arg(long)]
    pub id: i64,

    /// Organization ID
    #[arg(long)]
    pub organization_id: i64,
}

/// Manage organization smarthosts
#[derive(Args, Debug)]
pub struct SmartHostCommand {
    #[command(subcommand)]
    pub command: SmartHostSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SmartHostSubcommand {
    /// Show detailed information of a smarthost
    Show(ChildArgs),

    /// Create a new smarthost
    Create(SmartHostCreateArgs),

    /// Update a smarthost
    Update(SmartHostUpdateArgs),

    /// Delete a smarthost
    Delete(ChildArgs),
}

#[derive(Args, Debug)]
pub struct SmartHostCreateArgs {
    /// Organization ID
    #[arg(long)]
    pub organization_id: i64,

    #[command(flatten)]
    pub fields: SmartHostFields,
}

#[derive(Args, Debug)]
pub struct SmartHostUpdateArgs {
    #[command(flatten)]
    pub target: ChildArgs,

    #[command(flatten)]
    pub changes: SmartHostChanges,
}

/// Manage fallback servers
#[derive(Args, Debug)]
pub struct FallbackServerCommand {
    #[command(subcommand)]
    pub command: FallbackServerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FallbackServerSubcommand {
    /// Show detailed information of a fallback server
    Show(IdArgs),

    /// Create a new fallback server
    Create(FallbackCreateArgs),

    /// Update a fallback server
    Update(FallbackUpdateArgs),

    /// Delete a fallback server
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct FallbackCreateArgs {
    /// Organization ID
    #[arg(long)]
    pub organization_id: i64,

    #[command(flatten)]
    pub fields: ServerFields,
}

#[derive(Args, Debug)]
pub struct FallbackUpdateArgs {
    /// Fallback server ID
    #[arg(long)]
    pub id: i64,

    #[command(flatten)]
    pub changes: ServerChanges,
}

/// Manage relay settings
#[derive(Args, Debug)]
pub struct RelayCommand {
    #[command(subcommand)]
    pub command: RelaySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RelaySubcommand {
    /// Show detailed information of a relay setting
    Show(IdArgs),

    /// Create a new relay setting
    Create(RelayCreateArgs),

    /// Update a relay setting
    Update(RelayUpdateArgs),

    /// Delete a relay setting
    Delete(IdArgs),
}

#[derive(Args, Debug)]
pub struct RelayCreateArgs {
    /// Organization ID
    #[arg(long)]
    pub organization_id: i64,

    /// Host allowed to relay
    #[arg(long, default_value = "")]
    pub address: String,

    /// SMTP-AUTH username
    #[arg(long, default_value = "")]
    pub username: String,

    /// SMTP-AUTH password
    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long)]
    pub enable: bool,

    #[arg(long)]
    pub require_tls: bool,

    #[arg(long)]
    pub block_macros: bool,

    #[arg(long, default_value_t = 2)]
    pub spam_actions: i64,

    #[arg(long, default_value_t = 2)]
    pub high_spam_actions: i64,

    /// Messages per minute
    #[arg(long, default_value_t = 250)]
    pub rate_limit: i64,

    #[arg(long, default_value = "0")]
    pub low_score: LocalFloat64,

    #[arg(long, default_value = "0")]
    pub high_score: LocalFloat64,
}

impl RelayCreateArgs {
    fn to_relay(&self) -> RelaySetting {
        RelaySetting {
            address: self.address.clone(),
            username: self.username.clone(),
            password1: self.password.clone(),
            password2: self.password.clone(),
            description: self.description.clone(),
            enabled: self.enable,
            require_tls: self.require_tls,
            block_macros: self.block_macros,
            spam_actions: self.spam_actions,
            highspam_actions: self.high_spam_actions,
            ratelimit: self.rate_limit,
            low_score: self.low_score,
            high_score: self.high_score,
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct RelayUpdateArgs {
    /// Relay setting ID
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub address: Option<String>,

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

    #[arg(long, conflicts_with = "disable_block_macros")]
    pub block_macros: bool,

    #[arg(long)]
    pub disable_block_macros: bool,

    #[arg(long)]
    pub spam_actions: Option<i64>,

    #[arg(long)]
    pub high_spam_actions: Option<i64>,

    #[arg(long)]
    pub rate_limit: Option<i64>,

    #[arg(long)]
    pub low_score: Option<LocalFloat64>,

    #[arg(long)]
    pub high_score: Option<LocalFloat64>,
}

impl RelayUpdateArgs {
    fn apply(&self, relay: &mut RelaySetting) {
        if let Some(address) = &self.address {
            relay.address.clone_from(address);
        }
        if let Some(username) = &self.username {
            relay.username.clone_from(username);
        }
        if let Some(password) = &self.password {
            relay.password1.clone_from(password);
            relay.password2.clone_from(password);
        }
        if let Some(description) = &self.description {
            relay.description.clone_from(description);
        }
        relay.enabled = toggle(self.enable, self.disable).unwrap_or(relay.enabled);
        relay.require_tls = toggle(self.require_tls, self.disable_require_tls).unwrap_or(relay.require_tls);
        relay.block_macros = toggle(self.block_macros, self.disable_block_macros).unwrap_or(relay.block_macros);
        relay.spam_actions = self.spam_actions.unwrap_or(relay.spam_actions);
        relay.highspam_actions = self.high_spam_actions.unwrap_or(relay.highspam_actions);
        relay.ratelimit = self.rate_limit.unwrap_or(relay.ratelimit);
        relay.low_score = self.low_score.unwrap_or(relay.low_score);
        relay.high_score = self.high_score.unwrap_or(relay.high_score);
    }
}

/// Name printed in relay messages: the host, or the SMTP-AUTH user.
fn relay_name(relay: &RelaySetting) -> &str {
    if relay.address.is_empty() {
        &relay.username
    } else {
        &relay.address
    }
}

impl OrganizationCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            OrganizationSubcommand::SmartHost(cmd) => return cmd.run(global).await,
            OrganizationSubcommand::FallbackServer(cmd) => return cmd.run(global).await,
            OrganizationSubcommand::RelaySetting(cmd) => return cmd.run(global).await,
            _ => {}
        }

        let (client, writer) = global.connect()?;
        match &self.command {
            OrganizationSubcommand::Show(args) => {
                let org = client.get_organization(args.id).await?;
                writer.write(&org)
            }
            OrganizationSubcommand::Create(args) => {
                let form = OrganizationForm {
                    name: args.name.clone(),
                    domains: args.domains.clone(),
                    admins: args.admins.clone(),
                    ..Default::default()
                };
                let org = client.create_organization(&form).await?;
                writer.write(&org)
            }
            OrganizationSubcommand::Update(args) => {
                let org = client.get_organization(args.id).await?;
                let mut form = OrganizationForm::from_organization(&org);
                args.apply(&mut form);
                client.update_organization(&form).await?;
                writer.write_success(&format!("The organization: {} has been updated", form.name));
                Ok(())
            }
            OrganizationSubcommand::Delete(args) => {
                let org = client.get_organization(args.id).await?;
                client.delete_organization(org.id).await?;
                writer.write_success(&format!("The organization: {} has been deleted", org.name));
                Ok(())
            }
            OrganizationSubcommand::SmartHosts(args) => {
                let page = client
                    .get_org_smarthosts(args.organization_id, args.page.options().as_ref())
                    .await?;
                writer.write_list(&page)
            }
            OrganizationSubcommand::FallbackServers(args) => {
                let page = client
                    .get_fallback_servers(args.organization_id, args.page.options().as_ref())
                    .await?;
                writer.write_list(&page)
            }
            OrganizationSubcommand::SmartHost(_)
            | OrganizationSubcommand::FallbackServer(_)
            | OrganizationSubcommand::RelaySetting(_) => Ok(()),
        }
    }
}

impl SmartHostCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            SmartHostSubcommand::Show(args) => {
                let host = client.get_org_smarthost(args.organization_id, args.id).await?;
                writer.write(&host)
            }
            SmartHostSubcommand::Create(args) => {
                let host = client
                    .create_org_smarthost(args.organization_id, &args.fields.to_smarthost())
                    .await?;
                writer.write(&host)
            }
            SmartHostSubcommand::Update(args) => {
                let ChildArgs { id, organization_id } = args.target;
                let mut host = client.get_org_smarthost(organization_id, id).await?;
                args.changes.apply(&mut host);
                client.update_org_smarthost(organization_id, &host).await?;
                writer.write_success(&format!("The smarthost: {} has been updated", host.address));
                Ok(())
            }
            SmartHostSubcommand::Delete(args) => {
                let host = client.get_org_smarthost(args.organization_id, args.id).await?;
                client.delete_org_smarthost(args.organization_id, &host).await?;
                writer.write_success(&format!("The smarthost: {} has been deleted", host.address));
                Ok(())
            }
        }
    }
}

impl FallbackServerCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            FallbackServerSubcommand::Show(args) => {
                let server = client.get_fallback_server(args.id).await?;
                writer.write(&server)
            }
            FallbackServerSubcommand::Create(args) => {
                let server = client
                    .create_fallback_server(args.organization_id, &args.fields.to_fallback_server())
                    .await?;
                writer.write(&server)
            }
            FallbackServerSubcommand::Update(args) => {
                let mut server = client.get_fallback_server(args.id).await?;
                args.changes.apply_fallback(&mut server);
                client.update_fallback_server(&server).await?;
                writer.write_success(&format!("The fallback server: {} has been updated", server.address));
                Ok(())
            }
            FallbackServerSubcommand::Delete(args) => {
                let server = client.get_fallback_server(args.id).await?;
                client.delete_fallback_server(&server).await?;
                writer.write_success(&format!("The fallback server: {} has been deleted", server.address));
                Ok(())
            }
        }
    }
}

impl RelayCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            RelaySubcommand::Show(args) => {
                let relay = client.get_relay_setting(args.id).await?;
                writer.write(&relay)
            }
            RelaySubcommand::Create(args) => {
                let relay = client
                    .create_relay_setting(args.organization_id, &args.to_relay())
                    .await?;
                writer.write(&relay)
            }
            RelaySubcommand::Update(args) => {
                let mut relay = client.get_relay_setting(args.id).await?;
                args.apply(&mut relay);
                client.update_relay_setting(&relay).await?;
                writer.write_success(&format!("The relay setting: {} has been updated", relay_name(&relay)));
                Ok(())
            }
            RelaySubcommand::Delete(args) => {
                let relay = client.get_relay_setting(args.id).await?;
                client.delete_relay_setting(&relay).await?;
                writer.write_success(&format!("The relay setting: {} has been deleted", relay_name(&relay)));
                Ok(())
            }
        }
    }
}
