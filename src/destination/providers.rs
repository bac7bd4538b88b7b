//! External geocoding providers.
//!
//! The resolver only sees the [`GeocodingProvider`] trait. The production
//! implementation talks to OpenStreetMap Nominatim, which is noisy: its
//! rows go through the noise filter before anyone sees them.

use super::types::{Candidate, CandidateSource, Coordinate, ProviderError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// A low-trust, best-effort source of place suggestions.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    fn id(&self) -> &'static str;

    /// Look up `query`, giving up after `timeout`. Results carry `source = External`.
    async fn search(&self, query: &str, timeout: Duration) -> Result<Vec<Candidate>, ProviderError>;
}

// ─── Nominatim provider ─────────────────────────────────────────

pub const DEFAULT_NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "Waypoint/0.3 (destination-autocomplete)";

#[derive(Deserialize, Debug, Clone)]
pub struct NominatimResult {
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
    #[serde(default)]
    pub display_name: String,
}

impl NominatimResult {
    /// "Springfield, Sangamon County, Illinois, United States"
    ///   → title "Springfield", subtitle "Sangamon County, Illinois, United States"
    fn to_candidate(&self) -> Option<Candidate> {
        let mut parts = self
            .display_name
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty());
        let title = parts.next()?.to_string();
        let subtitle = parts.collect::<Vec<_>>().join(", ");

        let coordinate = match (self.lat.as_deref(), self.lon.as_deref()) {
            (Some(lat), Some(lon)) => match (lat.parse::<f64>(), lon.parse::<f64>()) {
                (Ok(lat), Ok(lon)) => Some(Coordinate { lat, lon }),
                _ => None,
            },
            _ => None,
        };

        Some(Candidate {
            title,
            subtitle,
            source: CandidateSource::External,
            coordinate,
        })
    }
}

/// OpenStreetMap Nominatim search.
#[derive(Debug, Clone)]
pub struct NominatimProvider {
    endpoint: String,
    user_agent: String,
    limit: usize,
}

impl NominatimProvider {
    pub fn new(endpoint: impl Into<String>, user_agent: impl Into<String>, limit: usize) -> Self {
        Self {
            endpoint: endpoint.into(),
            user_agent: user_agent.into(),
            limit: limit.clamp(1, 40),
        }
    }

    fn url(&self, query: &str) -> String {
        format!(
            "{}?q={}&format=json&limit={}&addressdetails=0",
            self.endpoint,
            urlencode(query),
            self.limit,
        )
    }
}

impl Default for NominatimProvider {
    fn default() -> Self {
        Self::new(DEFAULT_NOMINATIM_ENDPOINT, DEFAULT_USER_AGENT, 10)
    }
}

#[async_trait]
impl GeocodingProvider for NominatimProvider {
    fn id(&self) -> &'static str {
        "nominatim"
    }

    async fn search(&self, query: &str, timeout: Duration) -> Result<Vec<Candidate>, ProviderError> {
        let url = self.url(query);
        let user_agent = self.user_agent.clone();

        // ureq is blocking; keep it off the async workers.
        let rows = tokio::task::spawn_blocking(move || fetch_rows(&url, &user_agent, timeout))
            .await
            .map_err(|e| {
                if e.is_cancelled() {
                    ProviderError::Cancelled
                } else {
                    ProviderError::Transport(format!("lookup task failed: {}", e))
                }
            })??;

        Ok(parse_rows(&rows))
    }
}

fn fetch_rows(url: &str, user_agent: &str, timeout: Duration) -> Result<Vec<NominatimResult>, ProviderError> {
    let response = ureq::get(url)
        .set("User-Agent", user_agent)
        .timeout(timeout)
        .call()
        .map_err(|e| match e {
            ureq::Error::Transport(t) if is_timeout(&t) => ProviderError::Timeout(timeout.as_millis()),
            other => ProviderError::Transport(other.to_string()),
        })?;

    response
        .into_json()
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}

/// True when an I/O error somewhere in the transport's source chain timed out.
fn is_timeout(transport: &ureq::Transport) -> bool {
    let mut source = std::error::Error::source(transport);
    while let Some(err) = source {
        if let Some(io) = err.downcast_ref::<std::io::Error>() {
            if matches!(io.kind(), std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock) {
                return true;
            }
        }
        source = err.source();
    }
    false
}

fn parse_rows(rows: &[NominatimResult]) -> Vec<Candidate> {
    rows.iter().filter_map(NominatimResult::to_candidate).collect()
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~') {
            out.push(c);
        } else if c == ' ' {
            out.push_str("%20");
        } else {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("%{:02X}", b));
            }
        }
    }
    out
}
