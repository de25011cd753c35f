//
//  baruwa-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders API records for the terminal.
//!
//! - **JSON** (default): pretty-printed, keys coloured when stdout is a
//!   terminal. List commands print the whole envelope so the
//!   `links.pages.next` cursor can be fed back with `--page`.
//! - **Table**: one row per item via `comfy_table`, for list commands.
//!
//! ## Architecture
//!
//! - [`json`]: JSON rendering with optional key colouring
//! - [`table`]: Table building and the [`TableOutput`] impls for API records
//!
//! ## Example
//!
//! ```rust,ignore
//! use baruwa_cli::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&status)?;
//! writer.write_list(&users)?;
//! writer.write_success("The user: andrew has been deleted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::api::common::ListResponse;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty JSON.
    #[default]
    Json,
    /// Rows and columns, for list commands. Single records still print as
    /// JSON.
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown output format '{other}' (expected json or table)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Table => f.write_str("table"),
        }
    }
}

/// Writes command results to stdout and messages to stderr.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled() && console::user_attended(),
        }
    }

    /// Forces colour on or off, mainly for tests.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Prints a single record.
    pub fn write<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_json_to(&mut handle, value, self.color)
    }

    /// Prints one page of a list.
    ///
    /// An empty page prints a single blank line in either format.
    pub fn write_list<T: Serialize + TableOutput>(&self, page: &ListResponse<T>) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_list_to(&mut handle, page)
    }

    pub fn write_list_to<W: Write, T: Serialize + TableOutput>(
        &self,
        writer: &mut W,
        page: &ListResponse<T>,
    ) -> anyhow::Result<()> {
        if page.items.is_empty() {
            writeln!(writer)?;
            return Ok(());
        }
        match self.format {
            OutputFormat::Json => write_json_to(writer, page, self.color),
            OutputFormat::Table => {
                writeln!(writer, "{}", build_table(&page.items, self.color))?;
                if page.has_next() {
                    writeln!(writer, "Next page: {}", page.links.pages.next)?;
                }
                Ok(())
            }
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("{msg}");
        }
    }
}
