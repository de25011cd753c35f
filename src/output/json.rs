//
//  baruwa-cli
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON rendering.

use std::io::Write;

use console::style;
use serde::Serialize;

/// Writes `value` as pretty JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(writer: &mut W, value: &T, color: bool) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    if color {
        writeln!(writer, "{}", colorize_keys(&json))?;
    } else {
        writeln!(writer, "{json}")?;
    }
    Ok(())
}

/// Colours object keys in pretty-printed JSON.
///
/// Relies on the pretty printer putting each key at the start of its own
/// line, which `serde_json::to_string_pretty` guarantees.
pub fn colorize_keys(json: &str) -> String {
    json.lines()
        .map(|line| match split_key(line) {
            Some((indent, key, rest)) => format!("{indent}{}{rest}", style(key).blue().bold()),
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Splits `    "key": value` into indent, quoted key and the remainder.
fn split_key(line: &str) -> Option<(&str, &str, &str)> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('"') {
        return None;
    }
    let indent = &line[..line.len() - trimmed.len()];
    let mut escaped = false;
    for (i, c) in trimmed.char_indices().skip(1) {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => {
                let (key, rest) = trimmed.split_at(i + 1);
                return rest.starts_with(':').then_some((indent, key, rest));
            }
            _ => {}
        }
    }
    None
}
