//
//  baruwa-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod domain;
mod fields;
mod organization;
mod status;
mod token;
mod user;

pub use completion::CompletionCommand;
pub use domain::DomainCommand;
pub use organization::OrganizationCommand;
pub use status::StatusCommand;
pub use token::TokenCommand;
pub use user::UserCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::api::common::ListOptions;
use crate::api::BaruwaClient;
use crate::config::{Config, Settings};
use crate::output::{OutputFormat, OutputWriter};

/// Baruwa CLI - Manage a Baruwa mail gateway from the command line
#[derive(Parser, Debug)]
#[command(
    name = "baruwa",
    version,
    about = "A command-line client for the Baruwa REST API",
    long_about = "baruwa manages users, domains and organizations of a Baruwa mail gateway\n\
                  through its REST API.",
    propagate_version = true,
    after_help = "Use 'baruwa <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Baruwa API OAuth token
    #[arg(long, short = 'k', global = true, env = "BARUWA_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Baruwa server URL
    #[arg(long, short = 's', global = true, env = "BARUWA_API_SERVER")]
    pub server_url: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true, conflicts_with = "table")]
    pub json: bool,

    /// Output lists as a table
    #[arg(long, global = true)]
    pub table: bool,

    /// Read settings from this file instead of the default config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    fn output_override(&self) -> Option<OutputFormat> {
        if self.table {
            Some(OutputFormat::Table)
        } else if self.json {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }

    /// Resolves flags, environment and config file into [`Settings`].
    pub fn settings(&self) -> Result<Settings> {
        let config = Config::load(self.config.as_deref())?;
        Settings::resolve(
            self.server_url.as_deref(),
            self.api_token.as_deref(),
            self.output_override(),
            &config,
        )
    }

    /// Builds the API client and the output writer for a command.
    pub(crate) fn connect(&self) -> Result<(BaruwaClient, OutputWriter)> {
        let settings = self.settings()?;
        let client = settings.client()?;
        Ok((client, OutputWriter::new(settings.output)))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage user accounts
    User(UserCommand),

    /// List user accounts
    Users(PageArgs),

    /// Manage domains
    Domain(DomainCommand),

    /// List domains
    Domains(PageArgs),

    /// Manage organizations
    Organization(OrganizationCommand),

    /// List organizations
    Organizations(PageArgs),

    /// Show system status
    #[command(name = "systemstatus")]
    SystemStatus(StatusCommand),

    /// Exchange client credentials for an access token
    Token(TokenCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Pagination cursor accepted by every list command
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page URL to fetch, as printed in links.pages.next
    #[arg(long, value_name = "URL")]
    pub page: Option<String>,
}

impl PageArgs {
    pub fn options(&self) -> Option<ListOptions> {
        self.page.as_ref().map(ListOptions::page)
    }
}

/// Resolves an `--x` / `--disable-x` switch pair. `None` when neither was
/// given.
pub(crate) fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

pub async fn list_users(args: &PageArgs, global: &GlobalOptions) -> Result<()> {
    let (client, writer) = global.connect()?;
    let page = client.get_users(args.options().as_ref()).await?;
    writer.write_list(&page)
}

pub async fn list_domains(args: &PageArgs, global: &GlobalOptions) -> Result<()> {
    let (client, writer) = global.connect()?;
    let page = client.get_domains(args.options().as_ref()).await?;
    writer.write_list(&page)
}

pub async fn list_organizations(args: &PageArgs, global: &GlobalOptions) -> Result<()> {
    let (client, writer) = global.connect()?;
    let page = client.get_organizations(args.options().as_ref()).await?;
    writer.write_list(&page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_toggle() {
        assert_eq!(toggle(true, false), Some(true));
        assert_eq!(toggle(false, true), Some(false));
        assert_eq!(toggle(false, false), None);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "baruwa",
            "-s",
            "https://baruwa.example.com",
            "-k",
            "token",
            "--table",
            "users",
            "--page",
            "https://baruwa.example.com/api/v1/users?page=2",
        ])
        .unwrap();
        assert_eq!(cli.global.server_url.as_deref(), Some("https://baruwa.example.com"));
        assert_eq!(cli.global.output_override(), Some(OutputFormat::Table));
        match cli.command {
            Commands::Users(args) => assert_eq!(
                args.options(),
                Some(ListOptions::page("https://baruwa.example.com/api/v1/users?page=2"))
            ),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_json_and_table_conflict() {
        let err = Cli::try_parse_from(["baruwa", "--json", "--table", "domains"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_settings_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"https://file.example.com\"\napi_token = \"t\"\n").unwrap();

        let global = GlobalOptions {
            server_url: Some("https://flag.example.com".to_string()),
            config: Some(path),
            ..Default::default()
        };
        let settings = global.settings().unwrap();
        assert_eq!(settings.server_url, "https://flag.example.com");
        assert_eq!(settings.api_token, "t");
    }
}
