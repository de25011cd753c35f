//
//  baruwa-cli
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Baruwa API Responses
//!
//! Baruwa list endpoints return an envelope of the form:
//!
//! ```json
//! {
//!   "items": [...],
//!   "meta": {"total": 2},
//!   "links": {"pages": {"first": "...", "last": "...", "prev": "...", "next": "..."}}
//! }
//! ```
//!
//! Traversal is caller-driven: pass the `next` URL of one response back in
//! as the cursor of the following call, until no `next` link is returned or
//! the page comes back empty.
//!
//! # Example
//!
//! ```rust
//! use baruwa_cli::api::common::{ListOptions, ListResponse};
//!
//! let json = r#"{
//!     "items": [1, 2],
//!     "meta": {"total": 4},
//!     "links": {"pages": {"next": "https://baruwa.example.com/api/v1/domains?page=2"}}
//! }"#;
//!
//! let page: ListResponse<u32> = serde_json::from_str(json).unwrap();
//! assert!(page.has_next());
//!
//! let opts: ListOptions = page.next_options().unwrap();
//! assert_eq!(opts.page.as_deref(), Some("https://baruwa.example.com/api/v1/domains?page=2"));
//! ```
//!
//! # Cursor safety
//!
//! A cursor is an opaque URL handed out by the server. Before it is used the
//! client checks it with [`ListOptions::cursor`]: a cursor that does not
//! point below the request URL is ignored, and only its `page` parameter is
//! ever forwarded.

use serde::{Deserialize, Serialize};
use url::Url;

/// Options accepted by every list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// A "next page" URL previously returned by the server.
    pub page: Option<String>,
}

/// The outcome of checking a pagination cursor against a request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// No cursor was supplied.
    Absent,
    /// The cursor points elsewhere or carries no `page` value; it is ignored.
    Rejected,
    /// The cursor is usable; the value of its `page` parameter.
    Page(String),
}

impl ListOptions {
    /// Creates options that continue from the given cursor URL.
    pub fn page(cursor: impl Into<String>) -> Self {
        Self {
            page: Some(cursor.into()),
        }
    }

    /// Checks the cursor against the URL of the outgoing request.
    ///
    /// The cursor is resolved against `request_url`, so relative cursors are
    /// accepted. It is honoured only if its resolved form starts with
    /// `request_url`, which keeps a tampered cursor from redirecting the
    /// client to another host or path.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the cursor is not a valid URL.
    pub fn cursor(&self, request_url: &Url) -> Result<PageCursor, url::ParseError> {
        let raw = match self.page.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Ok(PageCursor::Absent),
        };

        let resolved = request_url.join(raw)?;
        if !resolved.as_str().starts_with(request_url.as_str()) {
            return Ok(PageCursor::Rejected);
        }

        let page = resolved
            .query_pairs()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value.into_owned());

        Ok(match page {
            Some(value) if !value.is_empty() => PageCursor::Page(value),
            _ => PageCursor::Rejected,
        })
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: i64,
}

/// Navigation links of a list response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub pages: Pages,
}

/// Absolute URLs of neighbouring pages. Empty when the page does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default, rename = "prev")]
    pub previous: String,
    #[serde(default)]
    pub next: String,
}

/// A single page of a Baruwa list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    #[serde(default)]
    pub meta: Meta,

    #[serde(default)]
    pub links: Links,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: Meta::default(),
            links: Links::default(),
        }
    }
}

impl<T> ListResponse<T> {
    /// Returns `true` if the server advertised a next page.
    pub fn has_next(&self) -> bool {
        !self.links.pages.next.is_empty()
    }

    /// Returns the options for fetching the next page, if any.
    pub fn next_options(&self) -> Option<ListOptions> {
        self.has_next()
            .then(|| ListOptions::page(self.links.pages.next.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users_url() -> Url {
        Url::parse("https://baruwa.example.com/api/v1/users").unwrap()
    }

    #[test]
    fn test_cursor_absent() {
        let opts = ListOptions::default();
        assert_eq!(opts.cursor(&users_url()).unwrap(), PageCursor::Absent);

        let opts = ListOptions::page("");
        assert_eq!(opts.cursor(&users_url()).unwrap(), PageCursor::Absent);
    }

    #[test]
    fn test_cursor_keeps_only_page() {
        let opts = ListOptions::page("https://baruwa.example.com/api/v1/users?page=2&?test=1");
        assert_eq!(
            opts.cursor(&users_url()).unwrap(),
            PageCursor::Page("2".to_string())
        );

        let opts = ListOptions::page("https://baruwa.example.com/api/v1/users?sort=name&page=7");
        assert_eq!(
            opts.cursor(&users_url()).unwrap(),
            PageCursor::Page("7".to_string())
        );
    }

    #[test]
    fn test_cursor_rejects_foreign_host() {
        let opts = ListOptions::page("https://b2.example.com/api/v1/users?page=2");
        assert_eq!(opts.cursor(&users_url()).unwrap(), PageCursor::Rejected);

        let opts = ListOptions::page("https://baruwa.example.com/api/v1/domains?page=2");
        assert_eq!(opts.cursor(&users_url()).unwrap(), PageCursor::Rejected);
    }

    #[test]
    fn test_cursor_without_page_is_rejected() {
        let opts = ListOptions::page("https://baruwa.example.com/api/v1/users?sort=name");
        assert_eq!(opts.cursor(&users_url()).unwrap(), PageCursor::Rejected);
    }

    #[test]
    fn test_relative_cursor_resolves_against_request() {
        let opts = ListOptions::page("users?page=3");
        assert_eq!(
            opts.cursor(&users_url()).unwrap(),
            PageCursor::Page("3".to_string())
        );
    }

    #[test]
    fn test_invalid_cursor_is_an_error() {
        let opts = ListOptions::page("http://[fe80::%31]:8080/");
        assert!(opts.cursor(&users_url()).is_err());
    }

    #[test]
    fn test_list_response_defaults() {
        let page: ListResponse<u32> = serde_json::from_str(r#"{"items": [], "meta": {"total": 0}}"#).unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_next());
        assert!(page.next_options().is_none());
        assert_eq!(page.links.pages.first, "");
    }
}
