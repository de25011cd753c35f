//
//  baruwa-cli
//  cli/domain.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Domain commands
//!
//! `baruwa domain show|create|update|delete` plus the per-domain resources:
//! alias domains, delivery servers (domain and user), authentication
//! settings with their LDAP/RADIUS settings, and smarthosts. Each resource
//! has a singular command with CRUD verbs and a plural list command.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::{ApiError, ListResponse, LocalFloat64};
use crate::api::domain::{
    AuthServer, DeliveryServer, DeliveryServerForm, Domain, DomainAliasForm, LdapSettings, RadiusSettings,
};
use crate::api::BaruwaClient;

use super::fields::{ServerChanges, ServerFields, SmartHostChanges, SmartHostFields};
use super::{toggle, GlobalOptions, PageArgs};

/// Manage domains
#[derive(Args, Debug)]
pub struct DomainCommand {
    #[command(subcommand)]
    pub command: DomainSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DomainSubcommand {
    /// Show detailed information of a domain
    Show(ShowArgs),

    /// Create a new domain
    Create(CreateArgs),

    /// Update a domain
    Update(UpdateArgs),

    /// Delete a domain
    Delete(IdArgs),

    /// Manage alias domains
    Alias(AliasCommand),

    /// List domain aliases
    Aliases(DomainListArgs),

    /// Manage domain delivery servers
    #[command(name = "deliveryserver")]
    DeliveryServer(DeliveryServerCommand),

    /// List domain delivery servers
    #[command(name = "deliveryservers")]
    DeliveryServers(DomainListArgs),

    /// Manage user delivery servers
    #[command(name = "userdeliveryserver")]
    UserDeliveryServer(DeliveryServerCommand),

    /// List user delivery servers
    #[command(name = "userdeliveryservers")]
    UserDeliveryServers(DomainListArgs),

    /// Manage authentication settings
    #[command(name = "authsetting")]
    AuthSetting(AuthSettingCommand),

    /// List authentication settings
    #[command(name = "authsettings")]
    AuthSettings(DomainListArgs),

    /// Manage smarthosts
    #[command(name = "smarthost")]
    SmartHost(SmartHostCommand),

    /// List smarthosts
    #[command(name = "smarthosts")]
    SmartHosts(DomainListArgs),
}

#[derive(Args, Debug)]
pub struct IdArgs {
    /// Domain ID
    #[arg(long)]
    pub id: i64,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ShowArgs {
    /// Domain ID
    #[arg(long)]
    pub id: Option<i64>,

    /// Domain name
    #[arg(long)]
    pub name: Option<String>,
}

/// A domain id plus the list cursor
#[derive(Args, Debug)]
pub struct DomainListArgs {
    /// Domain ID
    #[arg(long = "domain-id", visible_alias = "id")]
    pub domain_id: i64,

    #[command(flatten)]
    pub page: PageArgs,
}

/// Record id plus the domain it belongs to
#[derive(Args, Debug)]
pub struct ChildArgs {
    /// Record ID
    #[arg(long)]
    pub id: i64,

    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub site_url: String,

    /// Maximum message size for mail to and from this domain
    #[arg(long, default_value = "0")]
    pub message_size: String,

    /// Default language for users under this domain
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Default timezone for users under this domain
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Enable the domain
    #[arg(long)]
    pub enable: bool,

    #[arg(long)]
    pub accept_inbound: bool,

    #[arg(long)]
    pub discard_mail: bool,

    #[arg(long)]
    pub smtp_callout: bool,

    #[arg(long)]
    pub ldap_callout: bool,

    #[arg(long)]
    pub virus_checks: bool,

    #[arg(long)]
    pub virus_checks_at_smtp: bool,

    #[arg(long)]
    pub block_macros: bool,

    #[arg(long)]
    pub spam_checks: bool,

    /// What to do with probable spam
    #[arg(long, default_value_t = 2)]
    pub spam_actions: i64,

    /// What to do with definite spam
    #[arg(long, default_value_t = 2)]
    pub high_spam_actions: i64,

    /// What to do with messages matching virus signatures
    #[arg(long, default_value_t = 2)]
    pub virus_actions: i64,

    /// How to deliver when several delivery servers are set
    #[arg(long, default_value_t = 1)]
    pub delivery_mode: i64,

    /// How often PDF reports are sent
    #[arg(long, default_value_t = 3)]
    pub report_frequency: i64,

    /// Suspected spam threshold, 0.0 uses system defaults
    #[arg(long, default_value = "0")]
    pub low_score: LocalFloat64,

    /// Definite spam threshold, 0.0 uses system defaults
    #[arg(long, default_value = "0")]
    pub high_score: LocalFloat64,

    /// Owning organization ID (repeatable)
    #[arg(long = "organization")]
    pub organizations: Vec<i64>,
}

impl CreateArgs {
    fn to_domain(&self) -> Domain {
        Domain {
            name: self.name.clone(),
            site_url: self.site_url.clone(),
            enabled: self.enable,
            accept_inbound: self.accept_inbound,
            discard_mail: self.discard_mail,
            smtp_callout: self.smtp_callout,
            ldap_callout: self.ldap_callout,
            virus_checks: self.virus_checks,
            virus_checks_at_smtp: self.virus_checks_at_smtp,
            block_macros: self.block_macros,
            spam_checks: self.spam_checks,
            spam_actions: self.spam_actions,
            highspam_actions: self.high_spam_actions,
            virus_actions: self.virus_actions,
            low_score: self.low_score,
            high_score: self.high_score,
            message_size: self.message_size.clone(),
            delivery_mode: self.delivery_mode,
            language: self.language.clone(),
            timezone: self.timezone.clone(),
            report_every: self.report_frequency,
            organizations: self.organizations.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Domain ID
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub site_url: Option<String>,

    #[arg(long)]
    pub message_size: Option<String>,

    #[arg(long)]
    pub language: Option<String>,

    #[arg(long)]
    pub timezone: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_inbound")]
    pub accept_inbound: bool,

    #[arg(long)]
    pub disable_inbound: bool,

    #[arg(long, conflicts_with = "disable_discard_mail")]
    pub discard_mail: bool,

    #[arg(long)]
    pub disable_discard_mail: bool,

    #[arg(long, conflicts_with = "disable_smtp_callout")]
    pub smtp_callout: bool,

    #[arg(long)]
    pub disable_smtp_callout: bool,

    #[arg(long, conflicts_with = "disable_ldap_callout")]
    pub ldap_callout: bool,

    #[arg(long)]
    pub disable_ldap_callout: bool,

    #[arg(long, conflicts_with = "disable_virus_checks")]
    pub virus_checks: bool,

    #[arg(long)]
    pub disable_virus_checks: bool,

    #[arg(long, conflicts_with = "disable_virus_checks_at_smtp")]
    pub virus_checks_at_smtp: bool,

    #[arg(long)]
    pub disable_virus_checks_at_smtp: bool,

    #[arg(long, conflicts_with = "disable_block_macros")]
    pub block_macros: bool,

    #[arg(long)]
    pub disable_block_macros: bool,

    #[arg(long, conflicts_with = "disable_spam_checks")]
    pub spam_checks: bool,

    #[arg(long)]
    pub disable_spam_checks: bool,

    #[arg(long)]
    pub spam_actions: Option<i64>,

    #[arg(long)]
    pub high_spam_actions: Option<i64>,

    #[arg(long)]
    pub virus_actions: Option<i64>,

    #[arg(long)]
    pub delivery_mode: Option<i64>,

    #[arg(long)]
    pub report_frequency: Option<i64>,

    #[arg(long)]
    pub low_score: Option<LocalFloat64>,

    #[arg(long)]
    pub high_score: Option<LocalFloat64>,

    /// Replace the owning organizations (repeatable)
    #[arg(long = "organization")]
    pub organizations: Vec<i64>,
}

impl UpdateArgs {
    fn apply(&self, d: &mut Domain) {
        let set = |target: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                target.clone_from(value);
            }
        };
        set(&mut d.name, &self.name);
        set(&mut d.site_url, &self.site_url);
        set(&mut d.message_size, &self.message_size);
        set(&mut d.language, &self.language);
        set(&mut d.timezone, &self.timezone);

        let flip = |target: &mut bool, on: bool, off: bool| *target = toggle(on, off).unwrap_or(*target);
        flip(&mut d.enabled, self.enable, self.disable);
        flip(&mut d.accept_inbound, self.accept_inbound, self.disable_inbound);
        flip(&mut d.discard_mail, self.discard_mail, self.disable_discard_mail);
        flip(&mut d.smtp_callout, self.smtp_callout, self.disable_smtp_callout);
        flip(&mut d.ldap_callout, self.ldap_callout, self.disable_ldap_callout);
        flip(&mut d.virus_checks, self.virus_checks, self.disable_virus_checks);
        flip(&mut d.virus_checks_at_smtp, self.virus_checks_at_smtp, self.disable_virus_checks_at_smtp);
        flip(&mut d.block_macros, self.block_macros, self.disable_block_macros);
        flip(&mut d.spam_checks, self.spam_checks, self.disable_spam_checks);

        d.spam_actions = self.spam_actions.unwrap_or(d.spam_actions);
        d.highspam_actions = self.high_spam_actions.unwrap_or(d.highspam_actions);
        d.virus_actions = self.virus_actions.unwrap_or(d.virus_actions);
        d.delivery_mode = self.delivery_mode.unwrap_or(d.delivery_mode);
        d.report_every = self.report_frequency.unwrap_or(d.report_every);
        d.low_score = self.low_score.unwrap_or(d.low_score);
        d.high_score = self.high_score.unwrap_or(d.high_score);
        if !self.organizations.is_empty() {
            d.organizations.clone_from(&self.organizations);
        }
    }
}

// Alias domains

/// Manage alias domains
#[derive(Args, Debug)]
pub struct AliasCommand {
    #[command(subcommand)]
    pub command: AliasSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AliasSubcommand {
    /// Show detailed information of a domain alias
    Show(ChildArgs),

    /// Create a new domain alias
    Create(AliasCreateArgs),

    /// Update a domain alias
    Update(AliasUpdateArgs),

    /// Delete a domain alias
    Delete(ChildArgs),
}

#[derive(Args, Debug)]
pub struct AliasCreateArgs {
    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,

    /// Alias domain name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub enable: bool,

    #[arg(long)]
    pub accept_inbound: bool,
}

#[derive(Args, Debug)]
pub struct AliasUpdateArgs {
    #[command(flatten)]
    pub target: ChildArgs,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_accept_inbound")]
    pub accept_inbound: bool,

    #[arg(long)]
    pub disable_accept_inbound: bool,
}

// Delivery servers

/// Manage delivery servers
#[derive(Args, Debug)]
pub struct DeliveryServerCommand {
    #[command(subcommand)]
    pub command: DeliveryServerSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum DeliveryServerSubcommand {
    /// Show detailed information of a delivery server
    Show(ChildArgs),

    /// Create a new delivery server
    Create(ServerCreateArgs),

    /// Update a delivery server
    Update(ServerUpdateArgs),

    /// Delete a delivery server
    Delete(ChildArgs),
}

#[derive(Args, Debug)]
pub struct ServerCreateArgs {
    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,

    #[command(flatten)]
    pub fields: ServerFields,
}

#[derive(Args, Debug)]
pub struct ServerUpdateArgs {
    #[command(flatten)]
    pub target: ChildArgs,

    #[command(flatten)]
    pub changes: ServerChanges,
}

/// Which delivery server collection a command works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServerScope {
    Domain,
    User,
}

impl ServerScope {
    fn label(self) -> &'static str {
        match self {
            Self::Domain => "domain delivery server",
            Self::User => "user delivery server",
        }
    }

    async fn get(self, client: &BaruwaClient, domain_id: i64, id: i64) -> Result<DeliveryServer, ApiError> {
        match self {
            Self::Domain => client.get_domain_delivery_server(domain_id, id).await,
            Self::User => client.get_user_delivery_server(domain_id, id).await,
        }
    }

    async fn list(self, client: &BaruwaClient, args: &DomainListArgs) -> Result<ListResponse<DeliveryServer>, ApiError> {
        let opts = args.page.options();
        match self {
            Self::Domain => client.get_domain_delivery_servers(args.domain_id, opts.as_ref()).await,
            Self::User => client.get_user_delivery_servers(args.domain_id, opts.as_ref()).await,
        }
    }

    async fn create(
        self,
        client: &BaruwaClient,
        domain_id: i64,
        form: &DeliveryServerForm,
    ) -> Result<DeliveryServer, ApiError> {
        match self {
            Self::Domain => client.create_domain_delivery_server(domain_id, form).await,
            Self::User => client.create_user_delivery_server(domain_id, form).await,
        }
    }

    async fn update(self, client: &BaruwaClient, domain_id: i64, form: &DeliveryServerForm) -> Result<(), ApiError> {
        match self {
            Self::Domain => client.update_domain_delivery_server(domain_id, form).await.map(drop),
            Self::User => client.update_user_delivery_server(domain_id, form).await.map(drop),
        }
    }

    async fn delete(self, client: &BaruwaClient, domain_id: i64, form: &DeliveryServerForm) -> Result<(), ApiError> {
        match self {
            Self::Domain => client.delete_domain_delivery_server(domain_id, form).await,
            Self::User => client.delete_user_delivery_server(domain_id, form).await,
        }
    }
}

// Authentication settings

/// Manage authentication settings
#[derive(Args, Debug)]
pub struct AuthSettingCommand {
    #[command(subcommand)]
    pub command: AuthSettingSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSettingSubcommand {
    /// Show detailed information of an authentication setting
    Show(ChildArgs),

    /// Create a new authentication setting
    Create(AuthCreateArgs),

    /// Update an authentication setting
    Update(AuthUpdateArgs),

    /// Delete an authentication setting
    Delete(ChildArgs),

    /// Manage LDAP settings
    #[command(name = "ldapsetting")]
    LdapSetting(LdapCommand),

    /// Manage RADIUS settings
    #[command(name = "radiussetting")]
    RadiusSetting(RadiusCommand),
}

#[derive(Args, Debug)]
pub struct AuthCreateArgs {
    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub port: i64,

    /// 1 = POP3, 2 = IMAP, 3 = SMTP, 4 = RADIUS, 5 = LDAP
    #[arg(long)]
    pub protocol: i64,

    #[arg(long, default_value = "")]
    pub user_map_template: String,

    #[arg(long)]
    pub enable: bool,

    /// Strip the domain from logins before authenticating
    #[arg(long)]
    pub split_address: bool,
}

#[derive(Args, Debug)]
pub struct AuthUpdateArgs {
    #[command(flatten)]
    pub target: ChildArgs,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub port: Option<i64>,

    #[arg(long)]
    pub protocol: Option<i64>,

    #[arg(long)]
    pub user_map_template: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_split_address")]
    pub split_address: bool,

    #[arg(long)]
    pub disable_split_address: bool,
}

impl AuthUpdateArgs {
    fn apply(&self, server: &mut AuthServer) {
        if let Some(address) = &self.address {
            server.address.clone_from(address);
        }
        if let Some(template) = &self.user_map_template {
            server.user_map_template.clone_from(template);
        }
        server.port = self.port.unwrap_or(server.port);
        server.protocol = self.protocol.unwrap_or(server.protocol);
        server.enabled = toggle(self.enable, self.disable).unwrap_or(server.enabled);
        server.split_address = toggle(self.split_address, self.disable_split_address).unwrap_or(server.split_address);
    }
}

/// Addresses a record below an authentication setting
#[derive(Args, Debug)]
pub struct SettingsParentArgs {
    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,

    /// Authentication setting ID
    #[arg(long)]
    pub settings_id: i64,
}

/// Manage LDAP settings of an authentication setting
#[derive(Args, Debug)]
pub struct LdapCommand {
    #[command(subcommand)]
    pub command: LdapSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum LdapSubcommand {
    /// Show detailed information of an LDAP setting
    Show(LdapIdArgs),

    /// Create a new LDAP setting
    Create(LdapCreateArgs),

    /// Update an LDAP setting
    Update(LdapUpdateArgs),

    /// Delete an LDAP setting
    Delete(LdapIdArgs),
}

#[derive(Args, Debug)]
pub struct LdapIdArgs {
    #[command(flatten)]
    pub parent: SettingsParentArgs,

    #[arg(long)]
    pub ldap_settings_id: i64,
}

#[derive(Args, Debug)]
pub struct LdapCreateArgs {
    #[command(flatten)]
    pub parent: SettingsParentArgs,

    #[arg(long)]
    pub base_dn: String,

    #[arg(long, default_value = "uid")]
    pub name_attribute: String,

    #[arg(long, default_value = "mail")]
    pub email_attribute: String,

    #[arg(long, default_value = "")]
    pub bind_dn: String,

    #[arg(long, default_value = "")]
    pub bind_password: String,

    #[arg(long, default_value = "")]
    pub search_filter: String,

    #[arg(long, default_value = "subtree")]
    pub search_scope: String,

    #[arg(long, default_value = "")]
    pub email_search_filter: String,

    #[arg(long, default_value = "subtree")]
    pub email_search_scope: String,

    #[arg(long)]
    pub use_tls: bool,

    #[arg(long)]
    pub use_search: bool,
}

impl LdapCreateArgs {
    fn to_settings(&self) -> LdapSettings {
        LdapSettings {
            basedn: self.base_dn.clone(),
            nameattribute: self.name_attribute.clone(),
            emailattribute: self.email_attribute.clone(),
            binddn: self.bind_dn.clone(),
            bindpw: self.bind_password.clone(),
            usetls: self.use_tls,
            usesearch: self.use_search,
            searchfilter: self.search_filter.clone(),
            search_scope: self.search_scope.clone(),
            emailsearchfilter: self.email_search_filter.clone(),
            emailsearch_scope: self.email_search_scope.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct LdapUpdateArgs {
    #[command(flatten)]
    pub target: LdapIdArgs,

    #[arg(long)]
    pub base_dn: Option<String>,

    #[arg(long)]
    pub name_attribute: Option<String>,

    #[arg(long)]
    pub email_attribute: Option<String>,

    #[arg(long)]
    pub bind_dn: Option<String>,

    #[arg(long)]
    pub bind_password: Option<String>,

    #[arg(long)]
    pub search_filter: Option<String>,

    #[arg(long)]
    pub search_scope: Option<String>,

    #[arg(long)]
    pub email_search_filter: Option<String>,

    #[arg(long)]
    pub email_search_scope: Option<String>,

    #[arg(long, conflicts_with = "disable_use_tls")]
    pub use_tls: bool,

    #[arg(long)]
    pub disable_use_tls: bool,

    #[arg(long, conflicts_with = "disable_use_search")]
    pub use_search: bool,

    #[arg(long)]
    pub disable_use_search: bool,
}

impl LdapUpdateArgs {
    fn apply(&self, s: &mut LdapSettings) {
        let set = |target: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                target.clone_from(value);
            }
        };
        set(&mut s.basedn, &self.base_dn);
        set(&mut s.nameattribute, &self.name_attribute);
        set(&mut s.emailattribute, &self.email_attribute);
        set(&mut s.binddn, &self.bind_dn);
        set(&mut s.bindpw, &self.bind_password);
        set(&mut s.searchfilter, &self.search_filter);
        set(&mut s.search_scope, &self.search_scope);
        set(&mut s.emailsearchfilter, &self.email_search_filter);
        set(&mut s.emailsearch_scope, &self.email_search_scope);
        s.usetls = toggle(self.use_tls, self.disable_use_tls).unwrap_or(s.usetls);
        s.usesearch = toggle(self.use_search, self.disable_use_search).unwrap_or(s.usesearch);
    }
}

/// Manage RADIUS settings of an authentication setting
#[derive(Args, Debug)]
pub struct RadiusCommand {
    #[command(subcommand)]
    pub command: RadiusSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RadiusSubcommand {
    /// Show detailed information of a RADIUS setting
    Show(RadiusIdArgs),

    /// Create a new RADIUS setting
    Create(RadiusCreateArgs),

    /// Update a RADIUS setting
    Update(RadiusUpdateArgs),

    /// Delete a RADIUS setting
    Delete(RadiusIdArgs),
}

#[derive(Args, Debug)]
pub struct RadiusIdArgs {
    #[command(flatten)]
    pub parent: SettingsParentArgs,

    #[arg(long)]
    pub radius_settings_id: i64,
}

#[derive(Args, Debug)]
pub struct RadiusCreateArgs {
    #[command(flatten)]
    pub parent: SettingsParentArgs,

    #[arg(long)]
    pub secret: String,

    /// Seconds
    #[arg(long, default_value_t = 0)]
    pub timeout: i64,
}

#[derive(Args, Debug)]
pub struct RadiusUpdateArgs {
    #[command(flatten)]
    pub target: RadiusIdArgs,

    #[arg(long)]
    pub secret: Option<String>,

    #[arg(long)]
    pub timeout: Option<i64>,
}

// Smarthosts

/// Manage domain smarthosts
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
    /// Domain ID
    #[arg(long)]
    pub domain_id: i64,

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

impl DomainCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            DomainSubcommand::Show(args) => self.show(args, global).await,
            DomainSubcommand::Create(args) => self.create(args, global).await,
            DomainSubcommand::Update(args) => self.update(args, global).await,
            DomainSubcommand::Delete(args) => self.delete(args, global).await,
            DomainSubcommand::Alias(cmd) => cmd.run(global).await,
            DomainSubcommand::Aliases(args) => {
                let (client, writer) = global.connect()?;
                let page = client
                    .get_domain_aliases(args.domain_id, args.page.options().as_ref())
                    .await?;
                writer.write_list(&page)
            }
            DomainSubcommand::DeliveryServer(cmd) => cmd.run(ServerScope::Domain, global).await,
            DomainSubcommand::DeliveryServers(args) => list_delivery_servers(ServerScope::Domain, args, global).await,
            DomainSubcommand::UserDeliveryServer(cmd) => cmd.run(ServerScope::User, global).await,
            DomainSubcommand::UserDeliveryServers(args) => list_delivery_servers(ServerScope::User, args, global).await,
            DomainSubcommand::AuthSetting(cmd) => cmd.run(global).await,
            DomainSubcommand::AuthSettings(args) => {
                let (client, writer) = global.connect()?;
                let page = client
                    .get_auth_servers(args.domain_id, args.page.options().as_ref())
                    .await?;
                writer.write_list(&page)
            }
            DomainSubcommand::SmartHost(cmd) => cmd.run(global).await,
            DomainSubcommand::SmartHosts(args) => {
                let (client, writer) = global.connect()?;
                let page = client
                    .get_domain_smarthosts(args.domain_id, args.page.options().as_ref())
                    .await?;
                writer.write_list(&page)
            }
        }
    }

    async fn show(&self, args: &ShowArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let domain = match (&args.name, args.id) {
            (Some(name), _) => client.get_domain_by_name(name).await?,
            (None, Some(id)) => client.get_domain(id).await?,
            (None, None) => anyhow::bail!("--id or --name is required"),
        };
        writer.write(&domain)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let domain = client.create_domain(&args.to_domain()).await?;
        writer.write(&domain)
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let mut domain = client.get_domain(args.id).await?;
        args.apply(&mut domain);
        client.update_domain(&domain).await?;
        writer.write_success(&format!("The domain: {} has been updated", domain.name));
        Ok(())
    }

    async fn delete(&self, args: &IdArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let domain = client.get_domain(args.id).await?;
        client.delete_domain(domain.id).await?;
        writer.write_success(&format!("The domain: {} has been deleted", domain.name));
        Ok(())
    }
}

impl AliasCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            AliasSubcommand::Show(args) => {
                let alias = client.get_domain_alias(args.domain_id, args.id).await?;
                writer.write(&alias)
            }
            AliasSubcommand::Create(args) => {
                let form = DomainAliasForm {
                    domain: args.domain_id,
                    name: args.name.clone(),
                    enabled: args.enable,
                    accept_inbound: args.accept_inbound,
                    ..Default::default()
                };
                let alias = client.create_domain_alias(args.domain_id, &form).await?;
                writer.write(&alias)
            }
            AliasSubcommand::Update(args) => {
                let ChildArgs { id, domain_id } = args.target;
                let alias = client.get_domain_alias(domain_id, id).await?;
                let mut form = DomainAliasForm::from_alias(&alias);
                form.domain = domain_id;
                if let Some(name) = &args.name {
                    form.name.clone_from(name);
                }
                form.enabled = toggle(args.enable, args.disable).unwrap_or(form.enabled);
                form.accept_inbound = toggle(args.accept_inbound, args.disable_accept_inbound).unwrap_or(form.accept_inbound);
                client.update_domain_alias(domain_id, &form).await?;
                writer.write_success(&format!("The domain alias: {} has been updated", form.name));
                Ok(())
            }
            AliasSubcommand::Delete(args) => {
                let alias = client.get_domain_alias(args.domain_id, args.id).await?;
                let mut form = DomainAliasForm::from_alias(&alias);
                form.domain = args.domain_id;
                client.delete_domain_alias(args.domain_id, &form).await?;
                writer.write_success(&format!("The domain alias: {} has been deleted", alias.name));
                Ok(())
            }
        }
    }
}

async fn list_delivery_servers(scope: ServerScope, args: &DomainListArgs, global: &GlobalOptions) -> Result<()> {
    let (client, writer) = global.connect()?;
    let page = scope.list(&client, args).await?;
    writer.write_list(&page)
}

impl DeliveryServerCommand {
    async fn run(&self, scope: ServerScope, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            DeliveryServerSubcommand::Show(args) => {
                let server = scope.get(&client, args.domain_id, args.id).await?;
                writer.write(&server)
            }
            DeliveryServerSubcommand::Create(args) => {
                let form = args.fields.to_delivery_server();
                let server = scope.create(&client, args.domain_id, &form).await?;
                writer.write(&server)
            }
            DeliveryServerSubcommand::Update(args) => {
                let ChildArgs { id, domain_id } = args.target;
                let server = scope.get(&client, domain_id, id).await?;
                let mut form = DeliveryServerForm::from_server(&server);
                args.changes.apply_delivery(&mut form);
                scope.update(&client, domain_id, &form).await?;
                writer.write_success(&format!("The {}: {} has been updated", scope.label(), form.address));
                Ok(())
            }
            DeliveryServerSubcommand::Delete(args) => {
                let server = scope.get(&client, args.domain_id, args.id).await?;
                let form = DeliveryServerForm::from_server(&server);
                scope.delete(&client, args.domain_id, &form).await?;
                writer.write_success(&format!("The {}: {} has been deleted", scope.label(), form.address));
                Ok(())
            }
        }
    }
}

impl AuthSettingCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSettingSubcommand::LdapSetting(cmd) => return cmd.run(global).await,
            AuthSettingSubcommand::RadiusSetting(cmd) => return cmd.run(global).await,
            _ => {}
        }

        let (client, writer) = global.connect()?;
        match &self.command {
            AuthSettingSubcommand::Show(args) => {
                let server = client.get_auth_server(args.domain_id, args.id).await?;
                writer.write(&server)
            }
            AuthSettingSubcommand::Create(args) => {
                let server = AuthServer {
                    address: args.address.clone(),
                    protocol: args.protocol,
                    port: args.port,
                    enabled: args.enable,
                    split_address: args.split_address,
                    user_map_template: args.user_map_template.clone(),
                    ..Default::default()
                };
                let server = client.create_auth_server(args.domain_id, &server).await?;
                writer.write(&server)
            }
            AuthSettingSubcommand::Update(args) => {
                let ChildArgs { id, domain_id } = args.target;
                let mut server = client.get_auth_server(domain_id, id).await?;
                args.apply(&mut server);
                client.update_auth_server(domain_id, &server).await?;
                writer.write_success(&format!("The authentication setting: {} has been updated", server.address));
                Ok(())
            }
            AuthSettingSubcommand::Delete(args) => {
                let server = client.get_auth_server(args.domain_id, args.id).await?;
                client.delete_auth_server(args.domain_id, &server).await?;
                writer.write_success(&format!("The authentication setting: {} has been deleted", server.address));
                Ok(())
            }
            AuthSettingSubcommand::LdapSetting(_) | AuthSettingSubcommand::RadiusSetting(_) => Ok(()),
        }
    }
}

impl LdapCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            LdapSubcommand::Show(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = client
                    .get_ldap_settings(domain_id, settings_id, args.ldap_settings_id)
                    .await?;
                writer.write(&settings)
            }
            LdapSubcommand::Create(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = client
                    .create_ldap_settings(domain_id, settings_id, &args.to_settings())
                    .await?;
                writer.write(&settings)
            }
            LdapSubcommand::Update(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.target.parent;
                let mut settings = client
                    .get_ldap_settings(domain_id, settings_id, args.target.ldap_settings_id)
                    .await?;
                args.apply(&mut settings);
                client.update_ldap_settings(domain_id, settings_id, &settings).await?;
                writer.write_success(&format!("The ldap settings: {} have been updated", settings.basedn));
                Ok(())
            }
            LdapSubcommand::Delete(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = client
                    .get_ldap_settings(domain_id, settings_id, args.ldap_settings_id)
                    .await?;
                client.delete_ldap_settings(domain_id, settings_id, &settings).await?;
                writer.write_success(&format!("The ldap settings: {} have been deleted", settings.basedn));
                Ok(())
            }
        }
    }
}

impl RadiusCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            RadiusSubcommand::Show(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = client
                    .get_radius_settings(domain_id, settings_id, args.radius_settings_id)
                    .await?;
                writer.write(&settings)
            }
            RadiusSubcommand::Create(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = RadiusSettings {
                    secret: args.secret.clone(),
                    timeout: args.timeout,
                    ..Default::default()
                };
                let settings = client.create_radius_settings(domain_id, settings_id, &settings).await?;
                writer.write(&settings)
            }
            RadiusSubcommand::Update(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.target.parent;
                let mut settings = client
                    .get_radius_settings(domain_id, settings_id, args.target.radius_settings_id)
                    .await?;
                if let Some(secret) = &args.secret {
                    settings.secret.clone_from(secret);
                }
                settings.timeout = args.timeout.unwrap_or(settings.timeout);
                client.update_radius_settings(domain_id, settings_id, &settings).await?;
                writer.write_success(&format!("The radius settings with id: {} have been updated", settings.id));
                Ok(())
            }
            RadiusSubcommand::Delete(args) => {
                let SettingsParentArgs { domain_id, settings_id } = args.parent;
                let settings = client
                    .get_radius_settings(domain_id, settings_id, args.radius_settings_id)
                    .await?;
                client.delete_radius_settings(domain_id, settings_id, &settings).await?;
                writer.write_success(&format!("The radius settings with id: {} have been deleted", settings.id));
                Ok(())
            }
        }
    }
}

impl SmartHostCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            SmartHostSubcommand::Show(args) => {
                let host = client.get_domain_smarthost(args.domain_id, args.id).await?;
                writer.write(&host)
            }
            SmartHostSubcommand::Create(args) => {
                let host = client
                    .create_domain_smarthost(args.domain_id, &args.fields.to_smarthost())
                    .await?;
                writer.write(&host)
            }
            SmartHostSubcommand::Update(args) => {
                let ChildArgs { id, domain_id } = args.target;
                let mut host = client.get_domain_smarthost(domain_id, id).await?;
                args.changes.apply(&mut host);
                client.update_domain_smarthost(domain_id, &host).await?;
                writer.write_success(&format!("The smarthost: {} has been updated", host.address));
                Ok(())
            }
            SmartHostSubcommand::Delete(args) => {
                let host = client.get_domain_smarthost(args.domain_id, args.id).await?;
                client.delete_domain_smarthost(args.domain_id, &host).await?;
                writer.write_success(&format!("The smarthost: {} has been deleted", host.address));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse_domain(args: &[&str]) -> DomainSubcommand {
        let argv = ["baruwa", "domain"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Domain(cmd) => cmd.command,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_show_requires_id_or_name() {
        let err = Cli::try_parse_from(["baruwa", "domain", "show"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let DomainSubcommand::Show(args) = parse_domain(&["show", "--name", "example.com"]) else {
            panic!("expected show");
        };
        assert_eq!(args.name.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_create_defaults() {
        let DomainSubcommand::Create(args) =
            parse_domain(&["create", "--name", "example.com", "--site-url", "https://example.com"])
        else {
            panic!("expected create");
        };
        let domain = args.to_domain();
        assert_eq!(domain.language, "en");
        assert_eq!(domain.timezone, "UTC");
        assert_eq!(domain.message_size, "0");
        assert_eq!(domain.delivery_mode, 1);
        assert_eq!(domain.report_every, 3);
        assert!(!domain.enabled);
    }

    #[test]
    fn test_update_applies_toggles() {
        let DomainSubcommand::Update(args) =
            parse_domain(&["update", "--id", "2", "--disable", "--spam-checks", "--high-score", "15"])
        else {
            panic!("expected update");
        };
        let mut domain = Domain {
            id: 2,
            name: "example.com".to_string(),
            enabled: true,
            accept_inbound: true,
            ..Default::default()
        };
        args.apply(&mut domain);
        assert!(!domain.enabled);
        assert!(domain.spam_checks);
        assert!(domain.accept_inbound);
        assert_eq!(domain.high_score.to_string(), "15.0");
        assert_eq!(domain.name, "example.com");
    }

    #[test]
    fn test_nested_ldap_command() {
        let DomainSubcommand::AuthSetting(cmd) = parse_domain(&[
            "authsetting",
            "ldapsetting",
            "create",
            "--domain-id",
            "1",
            "--settings-id",
            "2",
            "--base-dn",
            "dc=example,dc=com",
        ]) else {
            panic!("expected authsetting");
        };
        let AuthSettingSubcommand::LdapSetting(LdapCommand {
            command: LdapSubcommand::Create(args),
        }) = cmd.command
        else {
            panic!("expected ldapsetting create");
        };
        let settings = args.to_settings();
        assert_eq!(settings.nameattribute, "uid");
        assert_eq!(settings.search_scope, "subtree");
        assert_eq!(args.parent.settings_id, 2);
    }

    #[test]
    fn test_list_accepts_id_alias() {
        let DomainSubcommand::SmartHosts(args) = parse_domain(&["smarthosts", "--id", "4"]) else {
            panic!("expected smarthosts");
        };
        assert_eq!(args.domain_id, 4);
        assert!(args.page.options().is_none());
    }
}
