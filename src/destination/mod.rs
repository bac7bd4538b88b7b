//! Destination resolution for the trip-request search box.
//!
//! Turns a few typed characters into a short ranked list of countries,
//! states and well-known cities. A curated gazetteer answers first; a
//! noisy external geocoder is the fallback, filtered for streets, POIs,
//! transit hubs and businesses.

pub mod allowlist;
pub mod filter;
pub mod gazetteer;
pub mod matcher;
pub mod providers;
pub mod ranker;
pub mod resolver;
pub mod session;
pub mod types;

pub use allowlist::WellKnownDestinations;
pub use filter::{admit, NoiseRules, Rejection};
pub use gazetteer::Gazetteer;
pub use matcher::{match_entry, normalize_query, MatchStrength};
pub use providers::{GeocodingProvider, NominatimProvider};
pub use resolver::{DestinationResolver, DEFAULT_TIMEOUT};
pub use session::{SearchSession, Suggestions};
pub use types::{
    Candidate, CandidateSource, Category, Coordinate, DuplicateEntry, GazetteerEntry, ProviderError,
    RankedResultList, MAX_RESULTS,
};
