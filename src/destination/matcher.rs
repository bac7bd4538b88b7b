//! Textual matching of a normalized query against gazetteer names.

use super::types::GazetteerEntry;

/// How strongly a query matched an entry. Ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchStrength {
    None,
    Substring,
    Prefix,
}

impl MatchStrength {
    pub fn is_match(self) -> bool {
        self != Self::None
    }
}

/// Trim and lower-case raw user input.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Match an already-normalized query against one entry's name.
pub fn match_entry(query: &str, entry: &GazetteerEntry) -> MatchStrength {
    match_name(query, &entry.name)
}

/// Match an already-normalized query against a display name.
pub fn match_name(query: &str, name: &str) -> MatchStrength {
    if query.is_empty() {
        return MatchStrength::None;
    }
    let name = name.to_lowercase();
    if name.starts_with(query) {
        MatchStrength::Prefix
    } else if name.contains(query) {
        MatchStrength::Substring
    } else {
        MatchStrength::None
    }
}
