//! HTTP client core for the Zendesk API.
//!
//! This module provides [`ZendeskClient`], which owns the transport: request
//! construction, basic-auth injection, single-shot calls with the
//! retry-after courtesy wait, and envelope decoding. The multi-page
//! retrieval engine lives in [`crate::pager`]; per-resource operations live
//! in [`crate::resources`].
//!
//! # Security
//!
//! Credentials are never logged. Error messages are sanitized before logging.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, Method, Response};
use url::Url;

use crate::config::Config;
use crate::envelope::{Envelope, ErrorEnvelope};
use crate::error::ZendeskError;
use crate::pager::{self, RetryAfter};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User-Agent sent with every request.
const USER_AGENT: &str = concat!("zendesk-rs/", env!("CARGO_PKG_VERSION"));

/// Client for the Zendesk Core API.
///
/// Handles authentication, request formatting, and response parsing. All
/// per-call state (accumulators, cursors, wait counters) is constructed
/// fresh inside each operation, so a single client is safe to share across
/// concurrent calls.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let ticket = client.show_ticket(35436).await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    pub(crate) http: Client,

    /// Base URL every endpoint is resolved against. Never changes mid-walk.
    pub(crate) base_url: Url,

    /// Account username (email, optionally with `/token` suffix).
    pub(crate) username: String,

    /// Account password or API token.
    /// SECURITY: Never log this value!
    pub(crate) password: String,

    /// Extra headers sent with every request.
    pub(crate) headers: HashMap<String, String>,
}

impl ZendeskClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZendeskError::HttpClient` if the HTTP client fails to
    /// initialize, or `ZendeskError::Url` if the configured endpoint does
    /// not parse.
    pub fn new(config: &Config) -> Result<Self, ZendeskError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ZendeskError::HttpClient)?;

        let base_url = Url::parse(&config.endpoint).map_err(ZendeskError::Url)?;

        Ok(Self {
            http,
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            headers: HashMap::new(),
        })
    }

    /// Returns an updated client that sends the provided header with each
    /// subsequent request.
    #[must_use]
    pub fn with_header(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut client = self.clone();
        client.headers.insert(name.into(), value.into());
        client
    }

    /// Resolves a relative endpoint against the base URL.
    pub(crate) fn resolve(&self, endpoint: &str) -> Result<Url, ZendeskError> {
        self.base_url.join(endpoint).map_err(ZendeskError::Url)
    }

    /// Issues a single HTTP request and returns the raw response.
    ///
    /// Sets basic auth, User-Agent, any client-wide extra headers, and a
    /// JSON body when one is provided. This is the lowest transport layer;
    /// it performs no retries and no status interpretation.
    pub(crate) async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Envelope>,
    ) -> Result<Response, ZendeskError> {
        let url = self.resolve(endpoint)?;

        tracing::debug!(method = %method, endpoint = %endpoint, "issuing API request");

        let mut req = self
            .http
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::USER_AGENT, USER_AGENT);

        for (name, value) in &self.headers {
            req = req.header(name, value);
        }

        if let Some(envelope) = body {
            let payload =
                serde_json::to_vec(envelope).map_err(ZendeskError::Serialization)?;
            req = req
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        req.send().await.map_err(|e| {
            if e.is_timeout() {
                return ZendeskError::timeout(
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    format!("{} {}", method, endpoint),
                );
            }
            let message = ZendeskError::sanitize_message(&e.to_string(), &self.password);
            tracing::warn!(method = %method, endpoint = %endpoint, error = %message, "transport failure");
            ZendeskError::Http(e)
        })
    }

    /// Issues a single HTTP request carrying a raw (non-envelope) body.
    ///
    /// Used by the upload endpoint, which takes file bytes instead of JSON.
    pub(crate) async fn request_raw(
        &self,
        method: Method,
        endpoint: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<Response, ZendeskError> {
        let url = self.resolve(endpoint)?;

        tracing::debug!(method = %method, endpoint = %endpoint, "issuing raw API request");

        let mut req = self
            .http
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.password))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);

        for (name, value) in &self.headers {
            req = req.header(name, value);
        }

        req.send().await.map_err(|e| {
            if e.is_timeout() {
                return ZendeskError::timeout(
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    format!("{} {}", method, endpoint),
                );
            }
            let message = ZendeskError::sanitize_message(&e.to_string(), &self.password);
            tracing::warn!(method = %method, endpoint = %endpoint, error = %message, "transport failure");
            ZendeskError::Http(e)
        })
    }

    /// Decodes a response into an [`Envelope`], or into the error reported
    /// to the caller on a non-success status.
    ///
    /// A non-2xx body that is not a valid error envelope falls back to a
    /// generic "Unknown" description rather than a decode failure.
    pub(crate) async fn read_envelope(
        &self,
        method: &Method,
        url: &str,
        response: Response,
    ) -> Result<Envelope, ZendeskError> {
        let status = response.status();

        if !status.is_success() {
            let envelope = response
                .json::<ErrorEnvelope>()
                .await
                .unwrap_or_else(|_| ErrorEnvelope::unknown());
            return Err(envelope.into_error(method.as_str(), url, status.as_u16()));
        }

        let body = response.text().await.map_err(ZendeskError::Http)?;

        tracing::trace!(body = %body, "API response");

        // Deletes answer 204 with no body.
        if body.trim().is_empty() {
            return Ok(Envelope::default());
        }

        serde_json::from_str(&body).map_err(ZendeskError::Decode)
    }

    /// Issues a single-shot request and decodes the envelope.
    ///
    /// When the response carries a positive `Retry-After` value the call
    /// sleeps for that many seconds and re-issues the same request once
    /// before decoding. A zero or unparseable value is ignored and the
    /// original response is decoded as-is.
    pub(crate) async fn do_request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Envelope>,
    ) -> Result<Envelope, ZendeskError> {
        let url = self.resolve(endpoint)?.to_string();
        let mut response = self.request(method.clone(), endpoint, body).await?;

        if let RetryAfter::Wait(seconds) = pager::retry_after(response.headers()) {
            tracing::debug!(
                endpoint = %endpoint,
                seconds,
                "server asked us to retry after a delay"
            );
            tokio::time::sleep(Duration::from_secs(seconds)).await;
            response = self.request(method.clone(), endpoint, body).await?;
        }

        self.read_envelope(&method, &url, response).await
    }

    /// Makes a single GET request.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Envelope, ZendeskError> {
        self.do_request(Method::GET, endpoint, None).await
    }

    /// Makes a single POST request with an envelope body.
    pub(crate) async fn post(
        &self,
        endpoint: &str,
        body: &Envelope,
    ) -> Result<Envelope, ZendeskError> {
        self.do_request(Method::POST, endpoint, Some(body)).await
    }

    /// Makes a single PUT request, with an optional envelope body.
    pub(crate) async fn put(
        &self,
        endpoint: &str,
        body: Option<&Envelope>,
    ) -> Result<Envelope, ZendeskError> {
        self.do_request(Method::PUT, endpoint, body).await
    }

    /// Makes a single DELETE request.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Envelope, ZendeskError> {
        self.do_request(Method::DELETE, endpoint, None).await
    }
}
