//
//  baruwa-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Baruwa API Library
//!
//! Rust bindings for the Baruwa mail gateway REST API (v1), and the
//! building blocks of the `baruwa` command-line client.
//!
//! ## Overview
//!
//! [`api::BaruwaClient`] wraps one HTTP client configured with a server URL
//! and a bearer token. Every resource the gateway exposes is a set of async
//! methods on it: users and their alias addresses, domains with their alias
//! domains, delivery servers, authentication settings and smarthosts, and
//! organizations with their smarthosts, fallback servers and relay settings.
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, resources and the scalar codecs
//! - [`auth`]: OAuth2 password-grant token exchange
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file and settings resolution
//! - [`output`]: Output formatting (JSON, Table)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use baruwa_cli::api::BaruwaClient;
//!
//! # async fn run() -> Result<(), baruwa_cli::api::ApiError> {
//! let client = BaruwaClient::new("https://baruwa.example.com", "token", None)?;
//! let status = client.get_system_status().await?;
//! println!("{} messages processed", status.total.total);
//! # Ok(())
//! # }
//! ```

/// HTTP client and resource bindings for the Baruwa REST API.
pub mod api;

/// OAuth2 token exchange.
pub mod auth;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the clap derive API.
pub mod cli;

/// Configuration file management.
///
/// The config file lives in the platform config directory:
/// - Linux: `~/.config/baruwa/config.toml`
/// - macOS: `~/Library/Application Support/com.baruwa.baruwa/config.toml`
/// - Windows: `%APPDATA%\baruwa\baruwa\config\config.toml`
pub mod config;

/// Output formatting for JSON and table modes.
pub mod output;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use baruwa_cli::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application version constant.
///
/// ```rust
/// use baruwa_cli::VERSION;
///
/// println!("baruwa version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    ///
    /// Never returned from `main`: clap reports parse errors and exits with
    /// this code on its own.
    pub const USAGE: i32 = 2;

    /// The server rejected the token (HTTP 401 or 403).
    ///
    /// Run `baruwa token` to obtain a fresh one.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested record does not exist (HTTP 404).
    pub const NOT_FOUND: i32 = 8;
}
