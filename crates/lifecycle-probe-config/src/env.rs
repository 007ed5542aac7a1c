// crates/lifecycle-probe-config/src/env.rs
// ============================================================================
// Module: Probe Environment
// Description: Environment-backed configuration for lifecycle runs.
// Purpose: Centralize env parsing with strict UTF-8 validation and defaults.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty strings, and malformed values fail
//! closed. Unset variables fall back to defaults for the canonical practice
//! target, so the probe runs out of the box.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default target base URL.
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";
/// Default administrator username for token acquisition.
pub const DEFAULT_USERNAME: &str = "admin";
/// Default administrator password for token acquisition.
pub const DEFAULT_PASSWORD: &str = "password123";
/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeEnv {
    /// Optional base URL override for the target service.
    BaseUrl,
    /// Optional username override for token acquisition.
    Username,
    /// Optional password override for token acquisition.
    Password,
    /// Optional per-request timeout override in milliseconds (positive integer).
    TimeoutMs,
    /// Allow cleartext HTTP targets (`true`/`false` or `1`/`0`).
    AllowHttp,
}

impl ProbeEnv {
    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "LIFECYCLE_PROBE_BASE_URL",
            Self::Username => "LIFECYCLE_PROBE_USERNAME",
            Self::Password => "LIFECYCLE_PROBE_PASSWORD",
            Self::TimeoutMs => "LIFECYCLE_PROBE_TIMEOUT_MS",
            Self::AllowHttp => "LIFECYCLE_PROBE_ALLOW_HTTP",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while loading run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Environment value failed UTF-8 validation.
    #[error("config environment error: {0}")]
    Environment(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed run configuration derived from environment variables.
///
/// # Invariants
/// - `base_url` is absolute and uses the `http` or `https` scheme.
/// - `timeout_ms` is greater than zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Base URL of the target service.
    pub base_url: Url,
    /// Username presented during token acquisition.
    pub username: String,
    /// Password presented during token acquisition.
    pub password: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Allow cleartext HTTP targets.
    pub allow_http: bool,
}

impl RunSettings {
    /// Loads configuration from environment variables, applying defaults for
    /// anything unset.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when an environment value is not valid UTF-8,
    /// is empty, or fails validation (for example, a malformed URL or a zero
    /// timeout).
    pub fn load() -> Result<Self, ConfigError> {
        let base_url_raw = read_env_nonempty(ProbeEnv::BaseUrl.as_str())?
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(ProbeEnv::BaseUrl.as_str(), &base_url_raw)?;
        let username = read_env_nonempty(ProbeEnv::Username.as_str())?
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        let password = read_env_nonempty(ProbeEnv::Password.as_str())?
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
        let timeout_ms = read_env_nonempty(ProbeEnv::TimeoutMs.as_str())?
            .map(|value| parse_timeout_ms(ProbeEnv::TimeoutMs.as_str(), &value))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let allow_http = parse_bool_env(
            ProbeEnv::AllowHttp.as_str(),
            read_env_nonempty(ProbeEnv::AllowHttp.as_str())?,
        )?;
        Ok(Self {
            base_url,
            username,
            password,
            timeout_ms,
            allow_http,
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the environment variable contains invalid
/// UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, ConfigError> {
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string()
            .map(Some)
            .map_err(|_| ConfigError::Environment(format!("{name} must be valid UTF-8")))
    })
}

/// Reads an environment variable and rejects empty values.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the variable is set but empty or whitespace.
fn read_env_nonempty(name: &str) -> Result<Option<String>, ConfigError> {
    match read_env_strict(name)? {
        Some(value) if value.trim().is_empty() => {
            Err(ConfigError::Invalid(format!("{name} must not be empty")))
        }
        Some(value) => Ok(Some(value)),
        None => Ok(None),
    }
}

/// Parses an absolute web URL from an environment variable string.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the value is not an absolute `http(s)` URL.
fn parse_base_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim())
        .map_err(|_| ConfigError::Invalid(format!("{name} must be an absolute url")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Invalid(format!("{name} must use the http or https scheme")));
    }
    Ok(url)
}

/// Parses a positive timeout value from an environment variable string.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the value is non-numeric or zero.
fn parse_timeout_ms(name: &str, raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    let millis: u64 = trimmed.parse().map_err(|_| {
        ConfigError::Invalid(format!("{name} must be a positive integer number of milliseconds"))
    })?;
    if millis == 0 {
        return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
    }
    Ok(millis)
}

/// Parses a boolean environment variable with an unset-means-false default.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the value is not a recognized boolean
/// literal.
fn parse_bool_env(name: &str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(ConfigError::Invalid(format!("{name} must be 1, 0, true, or false")))
}
