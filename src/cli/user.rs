//
//  baruwa-cli
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User account commands
//!
//! `baruwa user show|create|update|delete`, alias addresses under
//! `baruwa user alias` and password changes under `baruwa user password`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::common::LocalFloat64;
use crate::api::user::{AliasAddress, PasswordForm, UserForm};

use super::{toggle, GlobalOptions};

/// Manage user accounts
#[derive(Args, Debug)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UserSubcommand {
    /// Show detailed information of a user account
    Show(UidArgs),

    /// Create a new user account
    Create(CreateArgs),

    /// Update a user account
    Update(UpdateArgs),

    /// Delete a user account
    Delete(UidArgs),

    /// Manage user alias addresses
    Alias(AliasCommand),

    /// Change the password of a user account
    Password(PasswordArgs),
}

#[derive(Args, Debug)]
pub struct UidArgs {
    /// User ID
    #[arg(long, short = 'u')]
    pub uid: i64,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub password1: String,

    /// Password confirmation
    #[arg(long)]
    pub password2: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub timezone: String,

    /// Domain ID the account belongs to (repeatable)
    #[arg(long = "domain", required = true)]
    pub domains: Vec<i64>,

    #[arg(long)]
    pub firstname: Option<String>,

    #[arg(long)]
    pub lastname: Option<String>,

    /// 1 = administrator, 2 = domain administrator, 3 = user
    #[arg(long, default_value_t = 3)]
    pub account_type: i64,

    /// Activate the account
    #[arg(long)]
    pub enabled: bool,

    /// Send PDF reports
    #[arg(long)]
    pub send_reports: bool,

    /// Turn spam checking off for this account
    #[arg(long)]
    pub disable_spam_checks: bool,

    /// Suspected spam threshold, 0.0 uses system defaults
    #[arg(long)]
    pub low_score: Option<LocalFloat64>,

    /// Definite spam threshold, 0.0 uses system defaults
    #[arg(long)]
    pub high_score: Option<LocalFloat64>,

    #[arg(long)]
    pub block_macros: bool,

    /// Organization ID (repeatable)
    #[arg(long = "organization")]
    pub organizations: Vec<i64>,
}

impl CreateArgs {
    fn to_form(&self) -> UserForm {
        UserForm {
            username: Some(self.username.clone()),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            password1: Some(self.password1.clone()),
            password2: Some(self.password2.clone()),
            email: Some(self.email.clone()),
            timezone: Some(self.timezone.clone()),
            account_type: Some(self.account_type),
            active: Some(self.enabled),
            send_report: Some(self.send_reports),
            spam_checks: Some(!self.disable_spam_checks),
            low_score: self.low_score,
            high_score: self.high_score,
            block_macros: Some(self.block_macros),
            domains: self.domains.clone(),
            organizations: self.organizations.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// User ID
    #[arg(long, short = 'u')]
    pub uid: i64,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub firstname: Option<String>,

    #[arg(long)]
    pub lastname: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub timezone: Option<String>,

    /// Activate the account
    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    /// Deactivate the account
    #[arg(long)]
    pub disable: bool,

    #[arg(long, conflicts_with = "disable_reports")]
    pub enable_reports: bool,

    #[arg(long)]
    pub disable_reports: bool,

    #[arg(long, conflicts_with = "disable_spam_checks")]
    pub enable_spam_checks: bool,

    #[arg(long)]
    pub disable_spam_checks: bool,

    #[arg(long, conflicts_with = "disable_block_macros")]
    pub enable_block_macros: bool,

    #[arg(long)]
    pub disable_block_macros: bool,

    #[arg(long)]
    pub low_score: Option<LocalFloat64>,

    #[arg(long)]
    pub high_score: Option<LocalFloat64>,

    /// Replace the account's domains (repeatable)
    #[arg(long = "domain")]
    pub domains: Vec<i64>,
}

impl UpdateArgs {
    /// Applies the flags that were given on top of `form`.
    fn apply(&self, form: &mut UserForm) {
        let set = |target: &mut Option<String>, value: &Option<String>| {
            if value.is_some() {
                target.clone_from(value);
            }
        };
        set(&mut form.username, &self.username);
        set(&mut form.firstname, &self.firstname);
        set(&mut form.lastname, &self.lastname);
        set(&mut form.email, &self.email);
        set(&mut form.timezone, &self.timezone);

        form.active = toggle(self.enable, self.disable).or(form.active);
        form.send_report = toggle(self.enable_reports, self.disable_reports).or(form.send_report);
        form.spam_checks = toggle(self.enable_spam_checks, self.disable_spam_checks).or(form.spam_checks);
        form.block_macros = toggle(self.enable_block_macros, self.disable_block_macros).or(form.block_macros);
        form.low_score = self.low_score.or(form.low_score);
        form.high_score = self.high_score.or(form.high_score);
        if !self.domains.is_empty() {
            form.domains.clone_from(&self.domains);
        }
    }
}

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// User ID
    #[arg(long, short = 'u')]
    pub uid: i64,

    #[arg(long)]
    pub password1: String,

    /// Password confirmation
    #[arg(long)]
    pub password2: String,
}

/// Manage user alias addresses
#[derive(Args, Debug)]
pub struct AliasCommand {
    #[command(subcommand)]
    pub command: AliasSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AliasSubcommand {
    /// Show detailed information of an alias address
    Show(AliasIdArgs),

    /// Create a new alias address
    Create(AliasCreateArgs),

    /// Update an alias address
    Update(AliasUpdateArgs),

    /// Delete an alias address
    Delete(AliasIdArgs),
}

#[derive(Args, Debug)]
pub struct AliasIdArgs {
    /// Alias address ID
    #[arg(long)]
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct AliasCreateArgs {
    /// User ID
    #[arg(long, short = 'u')]
    pub uid: i64,

    #[arg(long)]
    pub alias_address: String,

    #[arg(long)]
    pub enabled: bool,
}

#[derive(Args, Debug)]
pub struct AliasUpdateArgs {
    /// Alias address ID
    #[arg(long)]
    pub id: i64,

    #[arg(long)]
    pub alias_address: Option<String>,

    #[arg(long, conflicts_with = "disable")]
    pub enable: bool,

    #[arg(long)]
    pub disable: bool,
}

impl UserCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UserSubcommand::Show(args) => self.show(args, global).await,
            UserSubcommand::Create(args) => self.create(args, global).await,
            UserSubcommand::Update(args) => self.update(args, global).await,
            UserSubcommand::Delete(args) => self.delete(args, global).await,
            UserSubcommand::Alias(cmd) => cmd.run(global).await,
            UserSubcommand::Password(args) => self.password(args, global).await,
        }
    }

    async fn show(&self, args: &UidArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let user = client.get_user(args.uid).await?;
        writer.write(&user)
    }

    async fn create(&self, args: &CreateArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let user = client.create_user(&args.to_form()).await?;
        writer.write(&user)
    }

    async fn update(&self, args: &UpdateArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let user = client.get_user(args.uid).await?;
        let mut form = UserForm::from_user(&user);
        args.apply(&mut form);
        client.update_user(&form).await?;
        writer.write_success(&format!("The user account: {} has been updated", user.username));
        Ok(())
    }

    async fn delete(&self, args: &UidArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        client.delete_user(args.uid).await?;
        writer.write_success(&format!("The user account with id: {} has been deleted", args.uid));
        Ok(())
    }

    async fn password(&self, args: &PasswordArgs, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        let form = PasswordForm {
            password1: args.password1.clone(),
            password2: args.password2.clone(),
        };
        client.change_user_password(args.uid, &form).await?;
        writer.write_success(&format!("The password for user id: {} has been changed", args.uid));
        Ok(())
    }
}

impl AliasCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let (client, writer) = global.connect()?;
        match &self.command {
            AliasSubcommand::Show(args) => {
                let alias = client.get_alias_address(args.id).await?;
                writer.write(&alias)
            }
            AliasSubcommand::Create(args) => {
                let alias = AliasAddress {
                    address: args.alias_address.clone(),
                    enabled: args.enabled,
                    ..Default::default()
                };
                let alias = client.create_alias_address(args.uid, &alias).await?;
                writer.write(&alias)
            }
            AliasSubcommand::Update(args) => {
                let mut alias = client.get_alias_address(args.id).await?;
                if let Some(address) = &args.alias_address {
                    alias.address.clone_from(address);
                }
                alias.enabled = toggle(args.enable, args.disable).unwrap_or(alias.enabled);
                client.update_alias_address(&alias).await?;
                writer.write_success(&format!("The alias address: {} has been updated", alias.address));
                Ok(())
            }
            AliasSubcommand::Delete(args) => {
                let alias = client.get_alias_address(args.id).await?;
                client.delete_alias_address(&alias).await?;
                writer.write_success(&format!("The alias address: {} has been deleted", alias.address));
                Ok(())
            }
        }
    }
}
