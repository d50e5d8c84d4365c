//! HTTP client for the INEGI DENUE consultation API.
//!
//! Wraps `reqwest` with DENUE-specific URL building and error handling. Both
//! endpoints take every parameter, the API token included, as a path segment
//! and answer with a JSON array of establishment objects.

use std::time::Duration;

use denue_core::Company;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Url};

use crate::error::DenueError;
use crate::normalize::{parse_establishments, SOURCE_BY_NAME, SOURCE_BY_RADIUS};

const DEFAULT_BASE_URL: &str = "https://www.inegi.org.mx/app/api/denue/v1/consulta";

/// Region code that scopes a by-name search to the whole country.
pub const NATIONAL_REGION: &str = "00";

/// Largest radius the by-radius endpoint accepts.
pub const MAX_RADIUS_METERS: u32 = 5000;

const NAME_PAGE: u32 = 1;
const NAME_PAGE_SIZE: u32 = 1000;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Client for the DENUE consultation API.
///
/// Use [`DenueClient::new`] for production or [`DenueClient::with_base_url`]
/// to point at a mock server in tests. The client holds no per-search state.
pub struct DenueClient {
    client: Client,
    base_url: Url,
}

impl DenueClient {
    /// Creates a client pointed at the production DENUE API.
    ///
    /// # Errors
    ///
    /// Returns [`DenueError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, DenueError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DenueError::Transport`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`DenueError::InvalidUrl`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, DenueError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            DenueError::InvalidUrl {
                endpoint: "base",
                reason: format!("'{base_url}': {e}"),
            }
        })?;

        Ok(Self { client, base_url })
    }

    /// Searches establishments whose name or activity matches `keyword`
    /// within `region` ([`NATIONAL_REGION`] for the whole country).
    ///
    /// Every returned company carries [`SOURCE_BY_NAME`] as its `fuente`.
    ///
    /// # Errors
    ///
    /// - [`DenueError::Api`] if the API answers with a non-2xx status.
    /// - [`DenueError::Transport`] on network failure or timeout.
    pub async fn search_by_name(
        &self,
        token: &str,
        keyword: &str,
        region: &str,
    ) -> Result<Vec<Company>, DenueError> {
        let url = self.name_url(token, keyword, region)?;
        tracing::debug!(endpoint = "Nombre", keyword, region, "querying DENUE");
        let body = self.request_json(url).await?;
        Ok(parse_establishments(&body, SOURCE_BY_NAME))
    }

    /// Searches establishments matching `keyword` within `radius_meters` of
    /// a point. Radii above [`MAX_RADIUS_METERS`] are clamped silently.
    ///
    /// Every returned company carries [`SOURCE_BY_RADIUS`] as its `fuente`.
    ///
    /// # Errors
    ///
    /// - [`DenueError::Api`] if the API answers with a non-2xx status.
    /// - [`DenueError::Transport`] on network failure or timeout.
    pub async fn search_by_radius(
        &self,
        token: &str,
        keyword: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Vec<Company>, DenueError> {
        let url = self.radius_url(token, keyword, latitude, longitude, radius_meters)?;
        tracing::debug!(
            endpoint = "buscar",
            keyword,
            latitude,
            longitude,
            radius_meters = radius_meters.min(MAX_RADIUS_METERS),
            "querying DENUE"
        );
        let body = self.request_json(url).await?;
        Ok(parse_establishments(&body, SOURCE_BY_RADIUS))
    }

    /// `{base}/Nombre/{keyword}/{region}/1/1000/{token}`
    fn name_url(&self, token: &str, keyword: &str, region: &str) -> Result<Url, DenueError> {
        let raw = format!(
            "{}/Nombre/{}/{}/{NAME_PAGE}/{NAME_PAGE_SIZE}/{}",
            self.base(),
            encode(keyword),
            encode(region),
            encode(token),
        );
        Url::parse(&raw).map_err(|e| DenueError::InvalidUrl {
            endpoint: "Nombre",
            reason: e.to_string(),
        })
    }

    /// `{base}/buscar/{keyword}/{lat},{lon}/{radius}/{token}`
    fn radius_url(
        &self,
        token: &str,
        keyword: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: u32,
    ) -> Result<Url, DenueError> {
        let radius = radius_meters.min(MAX_RADIUS_METERS);
        let raw = format!(
            "{}/buscar/{}/{latitude},{longitude}/{radius}/{}",
            self.base(),
            encode(keyword),
            encode(token),
        );
        Url::parse(&raw).map_err(|e| DenueError::InvalidUrl {
            endpoint: "buscar",
            reason: e.to_string(),
        })
    }

    fn base(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Sends a GET request and parses the body as JSON.
    ///
    /// A 2xx body that is not valid JSON is logged and treated as `null`,
    /// which the parser turns into an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`DenueError::Transport`] on network failure and
    /// [`DenueError::Api`] on a non-2xx status.
    async fn request_json(&self, url: Url) -> Result<serde_json::Value, DenueError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DenueError::Api {
                status: status.as_u16(),
                message: api_error_message(status, &body),
            });
        }

        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::warn!(error = %e, "DENUE returned a non-JSON body; treating as empty");
                Ok(serde_json::Value::Null)
            }
        }
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Best-effort human-readable message for a non-2xx response.
///
/// A JSON body with a non-empty `"message"` string wins; any other JSON body
/// gives a generic message with the status code; a body that is not JSON
/// falls back to the status code and reason phrase.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map_or_else(|| format!("API error: {}", status.as_u16()), str::to_string),
        Err(_) => format!(
            "API request failed with status {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
