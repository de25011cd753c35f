//
//  baruwa-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Resolves where the CLI talks to and how it prints.
//!
//! ## Precedence
//!
//! 1. Command-line flags (`--server-url`, `--api-token`, `--json`, `--table`)
//! 2. Environment variables (`BARUWA_API_SERVER`, `BARUWA_API_TOKEN`)
//! 3. The configuration file
//!
//! Flags and environment variables are merged by clap before they reach
//! [`Settings::resolve`]; the file only fills what is still unset.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/baruwa/config.toml`
//! - **macOS**: `~/Library/Application Support/com.baruwa.baruwa/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\baruwa\baruwa\config\config.toml`
//!
//! `--config <path>` reads another file instead.
//!
//! ## Example Configuration File
//!
//! ```toml
//! server_url = "https://baruwa.example.com"
//! api_token = "6f0bd3e3f9f1a1c2"
//! user_agent = "ops-scripts/1.0"
//! timeout_secs = 30
//! output = "table"
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{BaruwaClient, ClientOptions};
use crate::output::OutputFormat;

/// Text of the error raised when no server or token could be resolved.
pub const UNSET_MESSAGE: &str = "Endpoint or token variables not set";

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Baruwa server.
    pub server_url: Option<String>,
    pub api_token: Option<String>,
    /// Overrides the `baruwa-rs/<version>` user agent.
    pub user_agent: Option<String>,
    /// Per-request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// `json` or `table`.
    pub output: Option<String>,
}

impl Config {
    /// Loads the configuration from `path`, or from the default location
    /// when `path` is `None`.
    ///
    /// A missing file yields the default (empty) configuration. A file
    /// that exists but does not parse is an error naming the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        match read_config_file(path)? {
            Some(content) => toml::from_str(&content)
                .with_context(|| format!("Invalid config file {}", path.display())),
            None => Ok(Self::default()),
        }
    }

    /// Returns the default configuration file path, or `None` when the
    /// platform has no home directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "baruwa", "baruwa").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

/// Fully resolved settings for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub api_token: String,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
    pub output: OutputFormat,
}

impl Settings {
    /// Merges the flag/env values with the configuration file.
    ///
    /// Empty strings count as unset. Fails with [`UNSET_MESSAGE`] when no
    /// server or no token is available from any source.
    pub fn resolve(
        server_url: Option<&str>,
        api_token: Option<&str>,
        output: Option<OutputFormat>,
        config: &Config,
    ) -> Result<Self> {
        let pick = |flag: Option<&str>, file: &Option<String>| {
            flag.filter(|v| !v.is_empty())
                .or(file.as_deref().filter(|v| !v.is_empty()))
                .map(str::to_string)
        };

        let (Some(server_url), Some(api_token)) =
            (pick(server_url, &config.server_url), pick(api_token, &config.api_token))
        else {
            anyhow::bail!(UNSET_MESSAGE);
        };

        let output = match output {
            Some(format) => format,
            None => match config.output.as_deref() {
                Some(value) => value.parse().map_err(anyhow::Error::msg)?,
                None => OutputFormat::default(),
            },
        };

        Ok(Self {
            server_url,
            api_token,
            user_agent: config.user_agent.clone().filter(|v| !v.is_empty()),
            timeout: config.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            output,
        })
    }

    /// Builds the API client these settings describe.
    pub fn client(&self) -> Result<BaruwaClient> {
        let options = ClientOptions {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout,
            ..Default::default()
        };
        BaruwaClient::new(&self.server_url, &self.api_token, Some(options))
            .with_context(|| format!("Invalid server URL '{}'", self.server_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_full_config() {
        let (_dir, path) = write_config(
            r#"
            server_url = "https://baruwa.example.com"
            api_token = "file-token"
            user_agent = "ops/1.0"
            timeout_secs = 30
            output = "table"
            "#,
        );
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://baruwa.example.com"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.output.as_deref(), Some("table"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_names_path() {
        let (_dir, path) = write_config("server_url = [");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("config.toml"));
    }

    #[test]
    fn test_resolve_requires_server_and_token() {
        let err = Settings::resolve(None, None, None, &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), UNSET_MESSAGE);

        let err = Settings::resolve(Some("https://baruwa.example.com"), Some(""), None, &Config::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Endpoint or token variables not set");
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config {
            server_url: Some("https://file.example.com".to_string()),
            api_token: Some("file-token".to_string()),
            output: Some("table".to_string()),
            timeout_secs: Some(10),
            ..Default::default()
        };

        let settings = Settings::resolve(
            Some("https://flag.example.com"),
            None,
            Some(OutputFormat::Json),
            &config,
        )
        .unwrap();
        assert_eq!(settings.server_url, "https://flag.example.com");
        assert_eq!(settings.api_token, "file-token");
        assert_eq!(settings.output, OutputFormat::Json);
        assert_eq!(settings.timeout, Some(Duration::from_secs(10)));

        let settings = Settings::resolve(None, Some("flag-token"), None, &config).unwrap();
        assert_eq!(settings.server_url, "https://file.example.com");
        assert_eq!(settings.api_token, "flag-token");
        assert_eq!(settings.output, OutputFormat::Table);
    }

    #[test]
    fn test_bad_output_in_file() {
        let config = Config {
            server_url: Some("https://baruwa.example.com".to_string()),
            api_token: Some("token".to_string()),
            output: Some("yaml".to_string()),
            ..Default::default()
        };
        let err = Settings::resolve(None, None, None, &config).unwrap_err();
        assert!(err.to_string().contains("unknown output format 'yaml'"));
    }

    #[test]
    fn test_settings_client() {
        let settings = Settings::resolve(
            Some("https://baruwa.example.com/"),
            Some("token"),
            None,
            &Config {
                user_agent: Some("ops/1.0".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        let client = settings.client().unwrap();
        assert_eq!(client.base_url().as_str(), "https://baruwa.example.com/");
        assert_eq!(client.user_agent(), "ops/1.0");
    }
}
