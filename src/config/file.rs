//
//  baruwa-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Low-level reads of the TOML configuration file. A missing file is not an
//! error; it simply contributes nothing to the resolved settings.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the configuration file at `path`.
///
/// # Returns
///
/// - `Ok(Some(content))` - The file exists and was read
/// - `Ok(None)` - No file exists at `path`
/// - `Err` - The file exists but cannot be read
pub fn read_config_file(path: &Path) -> Result<Option<String>> {
    if !config_exists(path) {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    Ok(Some(content))
}

/// Returns `true` if a regular file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(!config_exists(&path));
        assert_eq!(read_config_file(&path).unwrap(), None);
    }

    #[test]
    fn test_directory_is_not_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!config_exists(dir.path()));
    }

    #[test]
    fn test_read_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"https://baruwa.example.com\"\n").unwrap();
        assert_eq!(
            read_config_file(&path).unwrap().as_deref(),
            Some("server_url = \"https://baruwa.example.com\"\n")
        );
    }
}
