// crates/lifecycle-probe-client/src/http.rs
// ============================================================================
// Module: Blocking HTTP Adapter
// Description: reqwest-backed implementation of the scenario client seam.
// Purpose: Issue bounded, token-aware calls against the configured target.
// Dependencies: lifecycle-probe-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! The adapter owns a single blocking `reqwest` client for the whole run.
//! Scenario requests carry relative paths; the adapter appends them to the
//! validated base URL, attaches the `token` cookie when a credential is
//! present, and reads bodies under a hard byte cap. Response payloads are
//! parsed as JSON opportunistically: a payload that is not JSON yields a
//! bodyless response, because several target endpoints answer plain text and
//! the checker treats an absent JSON body as an observation, not a fault.
//! Invariants:
//! - Redirects are never followed; a redirect surfaces as its 3xx status.
//! - A completed exchange is `Ok` regardless of status code.
//! - Bodies larger than `max_response_bytes` fail the call closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;
use std::time::Duration;

use lifecycle_probe_core::ApiClient;
use lifecycle_probe_core::ApiRequest;
use lifecycle_probe_core::ApiResponse;
use lifecycle_probe_core::Method;
use lifecycle_probe_core::TransportError;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::blocking::Response;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::COOKIE;
use reqwest::redirect::Policy;
use serde_json::Value;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the blocking HTTP adapter.
///
/// # Invariants
/// - `allow_http = false` blocks cleartext `http://` base URLs.
/// - `max_response_bytes` is enforced as a hard upper bound on response bodies.
/// - `timeout_ms` applies to the full request lifecycle of each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Base URL every scenario path is appended to.
    pub base_url: Url,
    /// Allow cleartext HTTP (disabled by default).
    pub allow_http: bool,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl HttpClientConfig {
    /// Creates a configuration for the given target with default limits.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            allow_http: false,
            timeout_ms: 10_000,
            max_response_bytes: 1024 * 1024,
            user_agent: "lifecycle-probe/0.1".to_string(),
        }
    }
}

// ============================================================================
// SECTION: Client Implementation
// ============================================================================

/// Blocking HTTP client for scenario execution.
///
/// # Invariants
/// - One underlying client serves every request of a run.
/// - The base URL was validated at construction; per-request work cannot
///   change scheme or host.
#[derive(Debug)]
pub struct HttpApiClient {
    /// Adapter configuration, including limits.
    config: HttpClientConfig,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl HttpApiClient {
    /// Creates a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] when the base URL violates policy or
    /// the underlying HTTP client cannot be created.
    pub fn new(config: HttpClientConfig) -> Result<Self, TransportError> {
        validate_base_url(&config.base_url, config.allow_http)?;
        let client = build_http_client(&config)?;
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns the configuration the adapter was built with.
    #[must_use]
    pub const fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Prepares one outbound request from its scenario description.
    fn prepare(&self, request: &ApiRequest) -> Result<RequestBuilder, TransportError> {
        let url = join_request_url(&self.config.base_url, &request.path)?;
        let mut builder = match request.method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
            Method::Put => self.client.put(url),
            Method::Delete => self.client.delete(url),
        };
        builder = builder.header(ACCEPT, "application/json");
        if let Some(token) = request.token.as_ref() {
            builder = builder.header(COOKIE, format!("token={}", token.as_str()));
        }
        if let Some(body) = request.body.as_ref() {
            let rendered = serde_json::to_string(body)
                .map_err(|_| TransportError::Request("request body is not serializable".to_string()))?;
            builder = builder.header(CONTENT_TYPE, "application/json").body(rendered);
        }
        Ok(builder)
    }
}

impl ApiClient for HttpApiClient {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let builder = self.prepare(request)?;
        let mut response = builder
            .send()
            .map_err(|err| classify_send_error(&err, self.config.timeout_ms))?;
        let status = response.status().as_u16();
        let bytes = read_response_limited(&mut response, self.config.max_response_bytes)?;
        Ok(ApiResponse::new(status, parse_json_body(&bytes)))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates scheme and credential policy for the base URL.
fn validate_base_url(url: &Url, allow_http: bool) -> Result<(), TransportError> {
    match url.scheme() {
        "https" => {}
        "http" if allow_http => {}
        "http" => {
            return Err(TransportError::Build(
                "cleartext http base url requires explicit opt-in".to_string(),
            ));
        }
        other => {
            return Err(TransportError::Build(format!("unsupported base url scheme: {other}")));
        }
    }
    if !url.username().is_empty() || url.password().is_some() {
        return Err(TransportError::Build("base url credentials are not allowed".to_string()));
    }
    if url.host_str().is_none() {
        return Err(TransportError::Build("base url host required".to_string()));
    }
    Ok(())
}

/// Builds the blocking HTTP client from adapter configuration.
fn build_http_client(config: &HttpClientConfig) -> Result<Client, TransportError> {
    Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .user_agent(config.user_agent.clone())
        .redirect(Policy::none())
        .build()
        .map_err(|_| TransportError::Build("http client build failed".to_string()))
}

/// Appends a scenario path to the base URL.
///
/// Plain concatenation keeps any base path prefix intact, which `Url::join`
/// would silently drop for absolute request paths.
fn join_request_url(base: &Url, path: &str) -> Result<Url, TransportError> {
    if !path.starts_with('/') {
        return Err(TransportError::Request(format!("request path must start with '/': {path}")));
    }
    let joined = format!("{}{path}", base.as_str().trim_end_matches('/'));
    Url::parse(&joined)
        .map_err(|_| TransportError::Request(format!("request path is not a valid url: {path}")))
}

/// Maps a send-side failure onto the transport error taxonomy.
fn classify_send_error(err: &reqwest::Error, timeout_ms: u64) -> TransportError {
    if err.is_timeout() {
        return TransportError::Timeout(format!("no response within {timeout_ms} ms"));
    }
    TransportError::Request(err.to_string())
}

/// Reads the response body while enforcing a byte limit.
fn read_response_limited(
    response: &mut Response,
    max_bytes: usize,
) -> Result<Vec<u8>, TransportError> {
    let expected_len = response.content_length();
    let max_bytes_u64 = u64::try_from(max_bytes)
        .map_err(|_| TransportError::Body("response size limit exceeds u64".to_string()))?;
    if let Some(expected) = expected_len
        && expected > max_bytes_u64
    {
        return Err(TransportError::Body("response exceeds size limit".to_string()));
    }
    let mut buf = Vec::new();
    let limit = max_bytes_u64.saturating_add(1);
    let mut handle = response.take(limit);
    handle
        .read_to_end(&mut buf)
        .map_err(|_| TransportError::Body("failed to read response".to_string()))?;
    if buf.len() > max_bytes {
        return Err(TransportError::Body("response exceeds size limit".to_string()));
    }
    if let Some(expected) = expected_len {
        let expected = usize::try_from(expected)
            .map_err(|_| TransportError::Body("invalid response length".to_string()))?;
        if buf.len() < expected {
            return Err(TransportError::Body("response truncated".to_string()));
        }
    }
    Ok(buf)
}

/// Parses a payload as JSON, yielding nothing for empty or non-JSON bodies.
fn parse_json_body(bytes: &[u8]) -> Option<Value> {
    if bytes.is_empty() {
        return None;
    }
    serde_json::from_slice(bytes).ok()
}
