//! Core types for destination resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of suggestions ever returned for one query.
pub const MAX_RESULTS: usize = 6;

/// Kind of canonical destination held in the gazetteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Country,
    StateOrProvince,
    City,
}

impl Category {
    /// Countries and states share the top ranking class; cities come after.
    pub fn rank_class(self) -> u8 {
        match self {
            Self::Country | Self::StateOrProvince => 0,
            Self::City => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country => write!(f, "Country"),
            Self::StateOrProvince => write!(f, "State/Province"),
            Self::City => write!(f, "City"),
        }
    }
}

/// One row of the curated reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub name: String,
    /// Parent region shown under the name ("Illinois, United States"). Empty for bare countries.
    #[serde(default)]
    pub parent_region: String,
    pub category: Category,
}

impl GazetteerEntry {
    pub fn new(name: impl Into<String>, parent_region: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            parent_region: parent_region.into(),
            category,
        }
    }
}

/// Where a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateSource {
    Curated,
    External,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Curated => write!(f, "Curated"),
            Self::External => write!(f, "External"),
        }
    }
}

/// Opaque coordinate carried through from the provider. Never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// A single suggestion shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub source: CandidateSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl Candidate {
    pub fn external(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            source: CandidateSource::External,
            coordinate: None,
        }
    }

    /// De-duplication identity: `(title, subtitle)`, case-sensitive as displayed.
    pub fn identity(&self) -> (&str, &str) {
        (&self.title, &self.subtitle)
    }

    pub fn display_line(&self) -> String {
        if self.subtitle.is_empty() {
            self.title.clone()
        } else {
            format!("{} \u{2014} {}", self.title, self.subtitle)
        }
    }
}

impl From<&GazetteerEntry> for Candidate {
    fn from(entry: &GazetteerEntry) -> Self {
        Self {
            title: entry.name.clone(),
            subtitle: entry.parent_region.clone(),
            source: CandidateSource::Curated,
            coordinate: None,
        }
    }
}

/// Ordered suggestions for one query: at most [`MAX_RESULTS`], no duplicate identities.
///
/// Only the rankers construct non-empty lists, so the invariants hold for
/// every value a caller can observe.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResultList(Vec<Candidate>);

impl RankedResultList {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Keep candidates in the given order, dropping repeated identities and
    /// truncating at [`MAX_RESULTS`].
    pub(crate) fn from_ordered(candidates: impl IntoIterator<Item = Candidate>) -> Self {
        let mut out: Vec<Candidate> = Vec::with_capacity(MAX_RESULTS);
        for candidate in candidates {
            if out.len() == MAX_RESULTS {
                break;
            }
            if out.iter().any(|c| c.identity() == candidate.identity()) {
                continue;
            }
            out.push(candidate);
        }
        Self(out)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Candidate> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Candidate> {
        self.0
    }
}

impl<'a> IntoIterator for &'a RankedResultList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Failures of the external geocoding provider.
///
/// These never reach callers of `resolve`; the resolver logs them and
/// degrades to an empty admitted set.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider timed out after {0} ms")]
    Timeout(u128),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
    #[error("provider lookup cancelled")]
    Cancelled,
}

/// Rejected attempt to build a gazetteer with a repeated `(name, parent_region)` pair.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("duplicate gazetteer entry '{name}' ({parent_region})")]
pub struct DuplicateEntry {
    pub name: String,
    pub parent_region: String,
}
