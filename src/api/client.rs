//
//  baruwa-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the Baruwa API
//!
//! This module provides the client every resource binding goes through. It
//! owns request construction, pagination-cursor rewriting, authentication
//! and error decoding.
//!
//! ## Features
//!
//! - URL resolution against a configurable base (a base path prefix is kept)
//! - Pagination cursors checked against the request URL before use
//! - Bearer token on resource calls, HTTP Basic on the token exchange
//! - Non-2xx responses decoded into [`ApiError::Api`]
//! - Form-encoded request bodies, JSON responses
//!
//! ## Request lifecycle
//!
//! ```text
//! new_request ──► authorize ──► execute ──► decode
//!  (URL, cursor,    (Bearer)     (status     (JSON into T,
//!   headers)                      check)      or nothing)
//! ```
//!
//! Every network method is `async`. Dropping the returned future cancels the
//! call; [`ClientOptions::timeout`] bounds each call. Nothing is retried.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::common::{messages, ApiError, ListOptions, PageCursor};
use super::form::Form;
use crate::auth::AuthCredential;

/// Version segment of the REST API.
pub const API_VERSION: &str = "v1";

/// Content type of every request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Returns the user agent sent when none is configured.
pub fn default_user_agent() -> String {
    format!("baruwa-rs/{}", crate::VERSION)
}

/// Returns the path of a resource under the versioned API root.
///
/// ```rust
/// use baruwa_cli::api::client::api_path;
///
/// assert_eq!(api_path("users/1"), "/api/v1/users/1");
/// ```
pub fn api_path(path: &str) -> String {
    format!("/api/{API_VERSION}/{path}")
}

/// Optional settings for [`BaruwaClient::new`].
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// HTTP client to use instead of the default one.
    pub http_client: Option<Client>,
    /// User agent to send instead of `baruwa-rs/<version>`. Ignored when empty.
    pub user_agent: Option<String>,
    /// Upper bound on each call, from connect to the end of the body.
    pub timeout: Option<Duration>,
}

/// The client for the Baruwa REST API.
///
/// The client is immutable after construction and cheap to clone. Each call
/// builds an independent request, so one client can be shared across tasks.
///
/// # Example
///
/// ```rust,no_run
/// use baruwa_cli::api::BaruwaClient;
///
/// # async fn example() -> Result<(), baruwa_cli::api::common::ApiError> {
/// let client = BaruwaClient::new("https://baruwa.example.com", "access-token", None)?;
/// let status = client.get_system_status().await?;
/// println!("inbound queue: {}", status.inbound);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BaruwaClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL, path always ending in `/`
    base_url: Url,
    user_agent: String,
    /// Bearer credential for resource calls
    auth: AuthCredential,
    timeout: Option<Duration>,
}

impl BaruwaClient {
    /// Creates a client for the server at `endpoint`.
    ///
    /// No network I/O happens here. The token is not checked; an empty or
    /// wrong token surfaces as a 401 on the first call.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] when `endpoint` is empty
    /// - [`ApiError::InvalidUrl`] when `endpoint` is not an absolute URL
    /// - [`ApiError::Transport`] when the default HTTP client cannot be built
    pub fn new(endpoint: &str, token: &str, options: Option<ClientOptions>) -> Result<Self, ApiError> {
        if endpoint.is_empty() {
            return Err(ApiError::Config(messages::ENDPOINT_REQUIRED));
        }

        let mut base_url = Url::parse(endpoint)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        base_url.set_query(None);
        base_url.set_fragment(None);
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let options = options.unwrap_or_default();

        let http = match options.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder().http1_only();
                if let Some(timeout) = options.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        let user_agent = options
            .user_agent
            .filter(|ua| !ua.is_empty())
            .unwrap_or_else(default_user_agent);

        Ok(Self {
            http,
            base_url,
            user_agent,
            auth: AuthCredential::bearer(token),
            timeout: options.timeout,
        })
    }

    /// Returns the base URL all paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Resolves `path` against the base URL.
    ///
    /// A leading `/` does not reset to the host root, so a server mounted at
    /// `https://host/baruwa/` keeps its prefix.
    fn resolve(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Builds an unauthenticated request.
    ///
    /// For GET requests a non-empty cursor in `opts` is checked with
    /// [`ListOptions::cursor`]. When it is honoured the query string becomes
    /// exactly `page=<value>`; otherwise the URL is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the path or the cursor do not parse.
    pub(crate) fn new_request(
        &self,
        method: Method,
        path: &str,
        opts: Option<&ListOptions>,
        body: Option<String>,
    ) -> Result<RequestBuilder, ApiError> {
        let mut url = self.resolve(path)?;

        if method == Method::GET {
            if let Some(opts) = opts {
                match opts.cursor(&url)? {
                    PageCursor::Page(page) => {
                        debug!(page = %page, "Following pagination cursor");
                        url.query_pairs_mut().clear().append_pair("page", &page);
                    }
                    PageCursor::Rejected => {
                        warn!(cursor = ?opts.page, request = %url, "Ignoring pagination cursor");
                    }
                    PageCursor::Absent => {}
                }
            }
        }

        let needs_form = method == Method::POST || method == Method::PUT || body.is_some();

        let mut request = self
            .http
            .request(method, url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .header(USER_AGENT, &self.user_agent);

        if needs_form {
            request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
        }
        if let Some(body) = body {
            request = request.body(body);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        Ok(request)
    }

    /// Builds a request carrying the bearer token.
    fn new_authorized_request(
        &self,
        method: Method,
        path: &str,
        opts: Option<&ListOptions>,
        body: Option<&Form>,
    ) -> Result<RequestBuilder, ApiError> {
        let request = self.new_request(method, &api_path(path), opts, body.map(Form::encode))?;
        Ok(self.auth.apply_to_request(request))
    }

    /// Sends a request and checks the status.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when the round trip fails
    /// - [`ApiError::Api`] on any non-2xx status
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();

        debug!(%method, %url, "Sending request");
        let response = self.http.execute(request).await?;
        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "Received response");

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_response(method, &url, status, &body));
        }

        Ok(response)
    }

    /// Reads the body of a successful response as JSON.
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET `/api/v1/<path>` and decode the response.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        opts: Option<&ListOptions>,
    ) -> Result<T, ApiError> {
        let request = self.new_authorized_request(Method::GET, path, opts, None)?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// POST a form to `/api/v1/<path>` and decode the response.
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str, form: &Form) -> Result<T, ApiError> {
        let request = self.new_authorized_request(Method::POST, path, None, Some(form))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// POST a form to `/api/v1/<path>`, ignoring the response body.
    pub(crate) async fn post_unit(&self, path: &str, form: &Form) -> Result<(), ApiError> {
        let request = self.new_authorized_request(Method::POST, path, None, Some(form))?;
        self.execute(request).await?;
        Ok(())
    }

    /// PUT a form to `/api/v1/<path>` and decode the response.
    pub(crate) async fn put<T: DeserializeOwned>(&self, path: &str, form: &Form) -> Result<T, ApiError> {
        let request = self.new_authorized_request(Method::PUT, path, None, Some(form))?;
        let response = self.execute(request).await?;
        Self::decode(response).await
    }

    /// DELETE `/api/v1/<path>`, optionally with a form body. The response
    /// body is never decoded.
    pub(crate) async fn delete(&self, path: &str, form: Option<&Form>) -> Result<(), ApiError> {
        let request = self.new_authorized_request(Method::DELETE, path, None, form)?;
        self.execute(request).await?;
        Ok(())
    }

    /// Builds the cursor for page `page` of the list at `path`.
    ///
    /// Lets callers jump straight to a page number instead of following
    /// `links.pages.next`.
    ///
    /// ```rust
    /// use baruwa_cli::api::BaruwaClient;
    ///
    /// let client = BaruwaClient::new("https://baruwa.example.com", "token", None).unwrap();
    /// let opts = client.page_options("domains", 3).unwrap();
    /// assert_eq!(opts.page.as_deref(), Some("https://baruwa.example.com/api/v1/domains?page=3"));
    /// ```
    pub fn page_options(&self, path: &str, page: u32) -> Result<ListOptions, ApiError> {
        let mut url = self.resolve(&api_path(path))?;
        url.query_pairs_mut().clear().append_pair("page", &page.to_string());
        Ok(ListOptions::page(url))
    }
}

/// Client used by resource tests, pointed at a mock server.
#[cfg(test)]
pub(crate) fn test_client(endpoint: &str) -> BaruwaClient {
    BaruwaClient::new(endpoint, "test-token", None).expect("valid test endpoint")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Item {
        id: i64,
    }

    fn client(endpoint: &str) -> BaruwaClient {
        test_client(endpoint)
    }

    fn build_get(client: &BaruwaClient, path: &str, cursor: &str) -> reqwest::Request {
        let opts = ListOptions::page(cursor);
        client
            .new_request(Method::GET, &api_path(path), Some(&opts), None)
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_requires_endpoint() {
        let err = BaruwaClient::new("", "token", None).unwrap_err();
        assert_eq!(err.to_string(), "The endpoint param is required");
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_new_rejects_relative_endpoint() {
        let err = BaruwaClient::new("baruwa.example.com", "token", None).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_new_defaults() {
        let client = client("https://baruwa.example.com");
        assert_eq!(client.base_url().as_str(), "https://baruwa.example.com/");
        assert_eq!(client.user_agent(), default_user_agent());
        assert!(client.user_agent().starts_with("baruwa-rs/"));
    }

    #[test]
    fn test_new_with_options() {
        let opts = ClientOptions {
            http_client: Some(reqwest::Client::new()),
            user_agent: Some("my-agent/1.0".to_string()),
            timeout: Some(Duration::from_secs(5)),
        };
        let client = BaruwaClient::new("https://baruwa.example.com", "", Some(opts)).unwrap();
        assert_eq!(client.user_agent(), "my-agent/1.0");

        let opts = ClientOptions {
            user_agent: Some(String::new()),
            ..Default::default()
        };
        let client = BaruwaClient::new("https://baruwa.example.com", "", Some(opts)).unwrap();
        assert_eq!(client.user_agent(), default_user_agent());
    }

    #[test]
    fn test_path_keeps_base_prefix() {
        let client = client("https://baruwa.example.com/baruwa");
        let request = client
            .new_request(Method::GET, &api_path("users"), None, None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.url().as_str(), "https://baruwa.example.com/baruwa/api/v1/users");
    }

    #[test]
    fn test_request_headers() {
        let client = client("https://baruwa.example.com");
        let request = client
            .new_request(Method::GET, "/api/v1/users", None, None)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[ACCEPT], "application/json");
        assert_eq!(request.headers()[USER_AGENT].to_str().unwrap(), default_user_agent());
        assert!(request.headers().get(CONTENT_TYPE).is_none());

        for method in [Method::POST, Method::PUT] {
            let request = client
                .new_request(method, "/api/v1/users", None, None)
                .unwrap()
                .build()
                .unwrap();
            assert_eq!(request.headers()[CONTENT_TYPE], FORM_CONTENT_TYPE);
        }

        let request = client
            .new_request(Method::DELETE, "/api/v1/users/1", None, Some("address=a".to_string()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.headers()[CONTENT_TYPE], FORM_CONTENT_TYPE);
    }

    #[test]
    fn test_cursor_rewrites_query() {
        let client = client("https://baruwa.example.com");
        let request = build_get(&client, "users", "https://baruwa.example.com/api/v1/users?page=2&?test=1");
        assert_eq!(request.url().as_str(), "https://baruwa.example.com/api/v1/users?page=2");
    }

    #[test]
    fn test_cursor_from_other_host_is_ignored() {
        let client = client("https://baruwa.example.com");
        let request = build_get(&client, "users", "https://b2.example.com/api/v1/users?page=2");
        assert_eq!(request.url().as_str(), "https://baruwa.example.com/api/v1/users");
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_cursor_ignored_for_post() {
        let client = client("https://baruwa.example.com");
        let opts = ListOptions::page("https://baruwa.example.com/api/v1/users?page=2");
        let request = client
            .new_request(Method::POST, &api_path("users"), Some(&opts), None)
            .unwrap()
            .build()
            .unwrap();
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_invalid_cursor_fails() {
        let client = client("https://baruwa.example.com");
        let opts = ListOptions::page("http://[fe80::%31]:8080/");
        let err = client
            .new_request(Method::GET, &api_path("users"), Some(&opts), None)
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_page_options() {
        let client = client("https://baruwa.example.com");
        let opts = client.page_options("domainaliases/1", 2).unwrap();
        let request = build_get(&client, "domainaliases/1", opts.page.as_deref().unwrap());
        assert_eq!(
            request.url().as_str(),
            "https://baruwa.example.com/api/v1/domainaliases/1?page=2"
        );
    }

    #[tokio::test]
    async fn test_get_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/v1/users/1")
            .match_header("authorization", "Bearer test-token")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_body(r#"{"id": 1}"#)
            .create_async()
            .await;

        let client = client(&server.url());
        let item: Item = client.get("users/1", None).await.unwrap();
        assert_eq!(item.id, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/users/1")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"code": 404, "error": "Not Found"}"#)
            .create_async()
            .await;

        let client = client(&server.url());
        let err = client.get::<Item>("users/1", None).await.unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.api_message(), Some("Not Found"));
        assert!(err.to_string().starts_with("GET "));
    }

    #[tokio::test]
    async fn test_error_without_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v1/users/1")
            .with_status(500)
            .create_async()
            .await;

        let client = client(&server.url());
        let err = client.get::<Item>("users/1", None).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.api_message(), Some("500 Internal Server Error"));
    }

    #[tokio::test]
    async fn test_empty_success_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/api/v1/users/1")
            .with_status(204)
            .create_async()
            .await;
        server
            .mock("GET", "/api/v1/users/1")
            .with_status(200)
            .create_async()
            .await;

        let client = client(&server.url());
        client.delete("users/1", None).await.unwrap();

        let err = client.get::<Item>("users/1", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_delete_with_form_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/v1/aliasaddresses/2")
            .match_header("content-type", FORM_CONTENT_TYPE)
            .match_body("address=info%40example.com&enabled=y")
            .with_status(204)
            .create_async()
            .await;

        let client = client(&server.url());
        let form = Form::new().text("address", "info@example.com").flag("enabled", true);
        client.delete("aliasaddresses/2", Some(&form)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_post_sends_form() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/v1/organizations")
            .match_header("content-type", FORM_CONTENT_TYPE)
            .match_header("user-agent", "custom/2.0")
            .match_body(Matcher::UrlEncoded("name".into(), "My Org".into()))
            .with_status(201)
            .with_body(r#"{"id": 5}"#)
            .create_async()
            .await;

        let opts = ClientOptions {
            user_agent: Some("custom/2.0".to_string()),
            ..Default::default()
        };
        let client = BaruwaClient::new(&server.url(), "test-token", Some(opts)).unwrap();
        let item: Item = client
            .post("organizations", &Form::new().text("name", "My Org"))
            .await
            .unwrap();
        assert_eq!(item.id, 5);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_transport_error() {
        let client = client("http://127.0.0.1:1");
        let err = client.get::<Item>("users/1", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.status_code(), None);
    }
}
