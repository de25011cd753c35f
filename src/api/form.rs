//
//  baruwa-cli
//  api/form.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Form encoding for write requests.
//!
//! Baruwa write endpoints take `application/x-www-form-urlencoded` bodies.
//! Every resource spells out its own field→key table through [`ToForm`], so
//! what goes on the wire is visible in one place and testable.
//!
//! Encoding rules:
//!
//! - booleans are sent as `y` when true and left out when false (the server
//!   treats an absent checkbox as false)
//! - `Option` fields are left out when `None`
//! - lists repeat the key once per value
//! - the resource `id` never goes in the body, it is part of the path

use std::fmt::Display;

use super::common::LocalFloat64;

/// Value sent for a true boolean field.
const TRUE_VALUE: &str = "y";

/// An ordered list of form fields.
///
/// # Example
///
/// ```rust
/// use baruwa_cli::api::form::Form;
///
/// let form = Form::new()
///     .text("address", "user@example.com")
///     .flag("enabled", true)
///     .flag("require_tls", false)
///     .ids("domains", &[2, 4]);
///
/// assert_eq!(form.encode(), "address=user%40example.com&enabled=y&domains=2&domains=4");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<(&'static str, String)>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always sends the value, even when empty.
    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    /// Sends the value only when it is not empty.
    pub fn text_nonempty(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.text(key, value)
        }
    }

    pub fn opt_text(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(key, v),
            None => self,
        }
    }

    pub fn flag(self, key: &'static str, value: bool) -> Self {
        if value {
            self.text(key, TRUE_VALUE)
        } else {
            self
        }
    }

    pub fn opt_flag(self, key: &'static str, value: Option<bool>) -> Self {
        self.flag(key, value.unwrap_or(false))
    }

    pub fn int(self, key: &'static str, value: impl Display) -> Self {
        self.text(key, value.to_string())
    }

    pub fn opt_int(self, key: &'static str, value: Option<i64>) -> Self {
        match value {
            Some(v) => self.int(key, v),
            None => self,
        }
    }

    pub fn score(self, key: &'static str, value: LocalFloat64) -> Self {
        self.text(key, value.to_string())
    }

    pub fn opt_score(self, key: &'static str, value: Option<LocalFloat64>) -> Self {
        match value {
            Some(v) => self.score(key, v),
            None => self,
        }
    }

    pub fn ids(mut self, key: &'static str, values: &[i64]) -> Self {
        for value in values {
            self.fields.push((key, value.to_string()));
        }
        self
    }

    /// Returns the first value sent under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value sent under `key`.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Encodes the fields as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.fields {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Types that can be sent as a form body.
pub trait ToForm {
    fn to_form(&self) -> Form;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omits_false_and_none() {
        let form = Form::new()
            .flag("enabled", false)
            .opt_flag("active", None)
            .opt_text("email", None)
            .opt_int("port", None)
            .opt_score("low_score", None)
            .text_nonempty("password", "");
        assert!(form.is_empty());
        assert_eq!(form.encode(), "");
    }

    #[test]
    fn test_encodes_values() {
        let form = Form::new()
            .text("name", "example.com")
            .text("site_url", "")
            .opt_flag("active", Some(true))
            .int("port", 25)
            .score("high_score", LocalFloat64::new(15.0));
        assert_eq!(form.len(), 5);
        assert_eq!(form.get("active"), Some("y"));
        assert_eq!(form.get("high_score"), Some("15.0"));
        assert_eq!(
            form.encode(),
            "name=example.com&site_url=&active=y&port=25&high_score=15.0"
        );
    }

    #[test]
    fn test_repeats_list_keys() {
        let form = Form::new().ids("organizations", &[1, 3]);
        assert_eq!(form.get_all("organizations"), vec!["1", "3"]);
        assert_eq!(form.encode(), "organizations=1&organizations=3");
    }
}
