// system-tests/tests/helpers/probe.rs
// ============================================================================
// Module: Probe Client Builders
// Description: HTTP adapter construction for suites targeting the stub.
// Purpose: Keep per-suite client wiring in one place.
// Dependencies: lifecycle-probe-client, url
// ============================================================================

//! ## Overview
//! Builds the blocking HTTP adapter the suites point at a stub instance.
//! Cleartext HTTP is enabled because the stub binds a loopback port.

use lifecycle_probe_client::HttpApiClient;
use lifecycle_probe_client::HttpClientConfig;
use url::Url;

/// Builds a probe client pointed at a stub target.
pub fn probe_client(base_url: &str) -> Result<HttpApiClient, String> {
    let url = Url::parse(base_url).map_err(|err| format!("parse stub url: {err}"))?;
    let mut config = HttpClientConfig::new(url);
    config.allow_http = true;
    config.timeout_ms = 5_000;
    HttpApiClient::new(config).map_err(|err| format!("build probe client: {err}"))
}
