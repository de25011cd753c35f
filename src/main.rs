//
//  baruwa-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use baruwa_cli::api::ApiError;
use baruwa_cli::cli::{self, Cli, Commands};
use baruwa_cli::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("BARUWA_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps server rejections onto the documented exit codes
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ApiError>().and_then(ApiError::status_code) {
        Some(401 | 403) => exit_codes::AUTH_ERROR,
        Some(404) => exit_codes::NOT_FOUND,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    let global = &cli.global;
    match &cli.command {
        Commands::User(cmd) => cmd.run(global).await,
        Commands::Users(args) => cli::list_users(args, global).await,
        Commands::Domain(cmd) => cmd.run(global).await,
        Commands::Domains(args) => cli::list_domains(args, global).await,
        Commands::Organization(cmd) => cmd.run(global).await,
        Commands::Organizations(args) => cli::list_organizations(args, global).await,
        Commands::SystemStatus(cmd) => cmd.run(global).await,
        Commands::Token(cmd) => cmd.run(global).await,
        Commands::Completion(cmd) => cmd.run(),
        Commands::Version => {
            println!("baruwa version {}", baruwa_cli::VERSION);
            Ok(())
        }
    }
}
