//
//  baruwa-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed bindings for the Baruwa mail gateway REST API (`/api/v1`).
//!
//! ## Architecture
//!
//! - [`client`]: Core HTTP client with authentication and request handling
//! - [`common`]: Shared types (errors, pagination, scalar codecs)
//! - [`form`]: Form-urlencoded request bodies
//! - [`user`], [`domain`], [`organization`], [`status`]: resource bindings
//!
//! Every resource operation is an `async fn` on [`BaruwaClient`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use baruwa_cli::api::BaruwaClient;
//!
//! # async fn run() -> Result<(), baruwa_cli::api::ApiError> {
//! let client = BaruwaClient::new("https://baruwa.example.com", "your-token", None)?;
//! let users = client.get_users(None).await?;
//! for user in &users.items {
//!     println!("{} <{}>", user.username, user.email);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Non-2xx responses become [`ApiError::Api`] carrying the status code and
//! the server's error message. Argument validation fails with
//! [`ApiError::Config`] before any request is sent.

/// Core HTTP client: URL resolution, pagination cursors, auth headers and
/// error decoding.
pub mod client;

/// Shared types: [`ApiError`], pagination and scalar codecs.
pub mod common;

pub mod form;

/// Accounts, their aliases and password changes.
pub mod user;

/// Domains and everything configured per domain.
pub mod domain;

/// Organizations, their smarthosts, fallback servers and relays.
pub mod organization;

pub mod status;

pub use client::{BaruwaClient, ClientOptions};
pub use common::ApiError;
