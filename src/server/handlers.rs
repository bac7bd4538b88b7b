use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

use crate::destination::{GazetteerEntry, RankedResultList};

use super::state::AppState;

/// Upper bound a client may request for the external lookup.
const MAX_TIMEOUT_MS: u64 = 10_000;

// ─── GET /api/suggest ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SuggestQuery {
    pub q: Option<String>,
    pub timeout_ms: Option<u64>,
}

pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestQuery>,
) -> Json<RankedResultList> {
    let start = Instant::now();
    let query = params.q.as_deref().unwrap_or("");
    let timeout = match params.timeout_ms {
        Some(ms) if ms > 0 => Duration::from_millis(ms.min(MAX_TIMEOUT_MS)),
        _ => state.default_timeout,
    };

    let results = state.resolver.resolve(query, timeout).await;

    info!(
        "GET /api/suggest?q={} -> {} results ({:.1}ms)",
        query,
        results.len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );
    Json(results)
}

// ─── GET /api/destinations ───────────────────────────────────────

pub async fn destinations(State(state): State<Arc<AppState>>) -> Json<Vec<GazetteerEntry>> {
    Json(state.resolver.gazetteer().all_entries().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::DestinationResolver;

    fn state() -> State<Arc<AppState>> {
        State(Arc::new(AppState {
            resolver: DestinationResolver::offline(),
            default_timeout: Duration::from_millis(100),
        }))
    }

    #[tokio::test]
    async fn test_suggest_curated() {
        let params = SuggestQuery { q: Some("Chi".into()), timeout_ms: None };
        let Json(results) = suggest(state(), Query(params)).await;
        assert_eq!(results.first().unwrap().title, "Chicago");
    }

    #[tokio::test]
    async fn test_suggest_missing_query() {
        let params = SuggestQuery { q: None, timeout_ms: Some(0) };
        let Json(results) = suggest(state(), Query(params)).await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_destinations_lists_gazetteer() {
        let Json(entries) = destinations(state()).await;
        assert!(entries.iter().any(|e| e.name == "Greece"));
    }
}
