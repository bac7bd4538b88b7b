//! Destination resolver — orchestrates the fallback chain.
//!
//! Flow:  normalize → curated gazetteer (match + rank) → external provider
//!        → noise filter → well-known boost → cap
//!
//! The external provider is consulted only when the gazetteer has no hit.
//! Provider failures never escape: they degrade to an empty list.

use super::allowlist::WellKnownDestinations;
use super::filter::NoiseRules;
use super::gazetteer::Gazetteer;
use super::matcher::normalize_query;
use super::providers::{GeocodingProvider, NominatimProvider};
use super::ranker::{rank_curated, rank_external};
use super::types::{Candidate, ProviderError, RankedResultList};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default bound on a single external lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2500);

/// The destination resolver with its fallback pipeline.
///
/// Cheap to share: every field is immutable after construction, so one
/// resolver behind an `Arc` serves any number of concurrent queries.
pub struct DestinationResolver {
    gazetteer: Arc<Gazetteer>,
    well_known: Arc<WellKnownDestinations>,
    rules: NoiseRules,
    provider: Option<Arc<dyn GeocodingProvider>>,
    offline: bool,
}

impl DestinationResolver {
    /// Built-in gazetteer and allow-list, Nominatim fallback.
    pub fn new() -> Self {
        Self::with_provider(Arc::new(NominatimProvider::default()))
    }

    /// Built-in data with a specific provider (for testing or alternative backends).
    pub fn with_provider(provider: Arc<dyn GeocodingProvider>) -> Self {
        Self {
            gazetteer: Arc::new(Gazetteer::builtin()),
            well_known: Arc::new(WellKnownDestinations::builtin()),
            rules: NoiseRules::default(),
            provider: Some(provider),
            offline: false,
        }
    }

    /// Curated data only; a gazetteer miss yields an empty list.
    pub fn offline() -> Self {
        Self {
            gazetteer: Arc::new(Gazetteer::builtin()),
            well_known: Arc::new(WellKnownDestinations::builtin()),
            rules: NoiseRules::default(),
            provider: None,
            offline: true,
        }
    }

    pub fn with_gazetteer(mut self, gazetteer: Arc<Gazetteer>) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    pub fn with_well_known(mut self, well_known: Arc<WellKnownDestinations>) -> Self {
        self.well_known = well_known;
        self
    }

    pub fn with_rules(mut self, rules: NoiseRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set offline mode — skip the external provider.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn well_known(&self) -> &WellKnownDestinations {
        &self.well_known
    }

    /// Resolve typed input into at most six ranked suggestions.
    ///
    /// Never fails: blank input, provider errors and timeouts all produce
    /// a (possibly empty) list.
    #[instrument(skip(self), level = "debug")]
    pub async fn resolve(&self, query: &str, timeout: Duration) -> RankedResultList {
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return RankedResultList::empty();
        }

        // 1. Curated gazetteer. Any hit is final.
        let curated = self.resolve_curated(&normalized);
        if !curated.is_empty() {
            debug!(hits = curated.len(), "curated gazetteer hit");
            return curated;
        }

        // 2. External provider (if online)
        let provider = match (&self.provider, self.offline) {
            (Some(p), false) => p,
            _ => {
                debug!("curated miss, offline");
                return RankedResultList::empty();
            }
        };

        let raw = match fetch_external(provider.as_ref(), query, timeout).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(provider = provider.id(), error = %e, "external lookup failed");
                Vec::new()
            }
        };

        // 3. Filter and re-rank
        let received = raw.len();
        let admitted: Vec<Candidate> = raw
            .into_iter()
            .filter(|c| match self.rules.check(c) {
                Ok(()) => true,
                Err(reason) => {
                    debug!(title = %c.title, subtitle = %c.subtitle, %reason, "rejected");
                    false
                }
            })
            .collect();
        debug!(received, admitted = admitted.len(), "external results filtered");

        rank_external(admitted, &self.well_known)
    }

    /// The synchronous curated path. `query` must already be normalized.
    pub fn resolve_curated(&self, query: &str) -> RankedResultList {
        rank_curated(query, &self.gazetteer)
    }
}

impl Default for DestinationResolver {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_external(
    provider: &dyn GeocodingProvider,
    query: &str,
    timeout: Duration,
) -> Result<Vec<Candidate>, ProviderError> {
    match tokio::time::timeout(timeout, provider.search(query, timeout)).await {
        Ok(result) => result,
        Err(_) => Err(ProviderError::Timeout(timeout.as_millis())),
    }
}
