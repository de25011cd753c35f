//
//  baruwa-cli
//  cli/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `baruwa token`: OAuth2 password-grant exchange.
//!
//! Only the server URL is needed here; the token being requested is what
//! every other command authenticates with.

use anyhow::{Context, Result};
use clap::Args;

use crate::api::{BaruwaClient, ClientOptions};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

use super::GlobalOptions;

/// Exchange OAuth2 client credentials for an access token
#[derive(Args, Debug)]
pub struct TokenCommand {
    /// OAuth2 client id
    #[arg(long, env = "BARUWA_CLIENT_ID")]
    pub client_id: String,

    /// OAuth2 client secret
    #[arg(long, env = "BARUWA_CLIENT_SECRET", hide_env_values = true)]
    pub secret: String,
}

impl TokenCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load(global.config.as_deref())?;
        let server = global
            .server_url
            .clone()
            .filter(|s| !s.is_empty())
            .or(config.server_url)
            .context("Server URL not set; pass --server-url or set BARUWA_API_SERVER")?;

        let options = ClientOptions {
            user_agent: config.user_agent,
            timeout: config.timeout_secs.map(std::time::Duration::from_secs),
            ..Default::default()
        };
        // The token endpoint takes Basic credentials; no bearer token exists yet.
        let client = BaruwaClient::new(&server, "", Some(options))?;
        let token = client
            .get_access_token(&self.client_id, &self.secret)
            .await
            .context("Token exchange failed")?;

        OutputWriter::new(OutputFormat::Json).write(&token)
    }
}
