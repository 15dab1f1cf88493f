use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use tracing::debug;

use crate::credential::Credentials;
use crate::params::{business_params, system_params, TIMESTAMP_FORMAT};
use crate::sign::compute_sign;

const API_URL: &str = "https://api.jd.com/routerjson";

/// Configuration for [`JdClient`].
#[derive(Debug, Clone, Default)]
pub struct JdConfig {
    /// Override the router endpoint (tests point this at a local server).
    pub endpoint: Option<String>,
    /// Caller-supplied HTTP client. Timeouts, proxies and TLS settings all
    /// belong here; the library never retries or inspects responses.
    pub http_client: Option<reqwest::Client>,
}

/// Client for the JD Union open platform router.
///
/// Stateless per call: each request assembles its own parameter map and
/// signature, so one client can be shared across tasks freely (the inner
/// `reqwest::Client` is already reference-counted).
#[derive(Debug, Clone)]
pub struct JdClient {
    credentials: Credentials,
    endpoint: String,
    http_client: reqwest::Client,
}

impl JdClient {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self::with_config(Credentials::new(app_key, app_secret), JdConfig::default())
    }

    pub fn with_config(credentials: Credentials, config: JdConfig) -> Self {
        Self {
            credentials,
            endpoint: config.endpoint.unwrap_or_else(|| API_URL.to_string()),
            http_client: config.http_client.unwrap_or_default(),
        }
    }

    /// Build the full signed query for one call, with the clock held by the
    /// caller.
    ///
    /// Merges system and business parameters, computes the signature over the
    /// merged set, then appends it as `sign`. Business payload field names
    /// must not collide with the system keys (`method`, `app_key`,
    /// `timestamp`, `format`, `v`, `sign_method`); the payload travels inside
    /// `360buy_param_json`, so this holds by construction for any payload.
    pub fn signed_query<T: Serialize>(
        &self,
        method: &str,
        params: &T,
        timestamp: &str,
    ) -> Result<Vec<(String, String)>> {
        let mut merged = system_params(method, &self.credentials.app_key, timestamp);
        merged.extend(business_params(params)?);

        let sign = compute_sign(&merged, &self.credentials.app_secret);
        merged.insert("sign".to_string(), sign);

        Ok(merged.into_iter().collect())
    }

    /// Issue a signed GET to the router and return the raw response.
    ///
    /// No parsing, no retry, no status inspection: a non-2xx response comes
    /// back as-is and network failures surface as `reqwest` errors.
    pub async fn request<T: Serialize>(
        &self,
        method: &str,
        params: &T,
    ) -> Result<reqwest::Response> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let query = self.signed_query(method, params, &timestamp)?;

        debug!(method, endpoint = %self.endpoint, "sending signed request");
        let response = self
            .http_client
            .get(&self.endpoint)
            .query(&query)
            .send()
            .await?;
        Ok(response)
    }
}
