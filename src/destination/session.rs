//! Search-box sessions: one in-flight resolution at a time.
//!
//! Every keystroke submits a new query. Submitting aborts the previous
//! task and bumps a generation counter; a finished task publishes only if
//! its generation is still current. The bump and the publish check take
//! the same lock, so once a newer query is submitted an older result can
//! never be observed.

use super::resolver::DestinationResolver;
use super::types::RankedResultList;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

/// The most recently published suggestions of a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    /// Generation of the query that produced these results (0 = nothing yet).
    pub generation: u64,
    pub query: String,
    pub results: RankedResultList,
}

#[derive(Default)]
struct InFlight {
    generation: u64,
    handle: Option<AbortHandle>,
}

/// A single search box bound to a shared resolver.
pub struct SearchSession {
    resolver: Arc<DestinationResolver>,
    state: Arc<Mutex<InFlight>>,
    published: Arc<watch::Sender<Suggestions>>,
}

impl SearchSession {
    pub fn new(resolver: Arc<DestinationResolver>) -> Self {
        let (tx, _rx) = watch::channel(Suggestions::default());
        Self {
            resolver,
            state: Arc::new(Mutex::new(InFlight::default())),
            published: Arc::new(tx),
        }
    }

    /// Start resolving `query`, superseding whatever was in flight.
    ///
    /// Returns immediately. The handle yields `Some(results)` if this query
    /// was still current when it finished, `None` if it was superseded.
    /// The handle errors with a cancelled `JoinError` if it was aborted.
    pub fn submit(&self, query: &str, timeout: Duration) -> JoinHandle<Option<RankedResultList>> {
        let resolver = Arc::clone(&self.resolver);
        let state = Arc::clone(&self.state);
        let published = Arc::clone(&self.published);
        let query = query.to_string();

        let mut guard = lock(&self.state);
        if let Some(previous) = guard.handle.take() {
            previous.abort();
        }
        guard.generation += 1;
        let generation = guard.generation;

        // The task cannot publish before `guard` is dropped: it needs the same lock.
        let task = tokio::spawn(async move {
            let results = resolver.resolve(&query, timeout).await;

            let mut current = lock(&state);
            if current.generation != generation {
                debug!(generation, current = current.generation, %query, "discarding stale results");
                return None;
            }
            current.handle = None;
            published.send_replace(Suggestions {
                generation,
                query,
                results: results.clone(),
            });
            Some(results)
        });
        guard.handle = Some(task.abort_handle());
        task
    }

    /// Submit `query` and wait for it. `None` if a newer query superseded it.
    pub async fn search(&self, query: &str, timeout: Duration) -> Option<RankedResultList> {
        self.submit(query, timeout).await.ok().flatten()
    }

    /// Abort the in-flight lookup, if any. Nothing is published for it.
    pub fn cancel(&self) -> bool {
        let mut guard = lock(&self.state);
        guard.generation += 1;
        match guard.handle.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Receive every published result set, newest only.
    pub fn subscribe(&self) -> watch::Receiver<Suggestions> {
        self.published.subscribe()
    }

    pub fn latest(&self) -> Suggestions {
        self.published.borrow().clone()
    }

    pub fn resolver(&self) -> &Arc<DestinationResolver> {
        &self.resolver
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.state).handle.take() {
            handle.abort();
        }
    }
}

fn lock(state: &Mutex<InFlight>) -> MutexGuard<'_, InFlight> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
