//! Well-known destination allow-list used to boost fallback results.

use std::collections::HashSet;

const DEFAULT_WELL_KNOWN: &[&str] = &[
    "amsterdam", "athens", "auckland", "bangkok", "barcelona", "beijing",
    "berlin", "bogota", "boston", "budapest", "buenos aires", "cairo",
    "cape town", "chicago", "copenhagen", "delhi", "doha", "dubai",
    "dublin", "edinburgh", "florence", "hanoi", "hong kong", "honolulu",
    "istanbul", "jerusalem", "kyoto", "las vegas", "lima", "lisbon",
    "london", "los angeles", "madrid", "marrakesh", "mecca", "medina",
    "melbourne", "mexico city", "miami", "milan", "montreal", "moscow",
    "mumbai", "munich", "nairobi", "new orleans", "new york", "oslo",
    "paris", "prague", "reykjavik", "rio de janeiro", "rome", "san francisco",
    "santiago", "seattle", "seoul", "shanghai", "singapore", "stockholm",
    "sydney", "tokyo", "toronto", "vancouver", "venice", "vienna", "zurich",
];

/// Case-insensitive set of globally recognizable place names.
#[derive(Debug, Clone)]
pub struct WellKnownDestinations {
    names: HashSet<String>,
}

impl WellKnownDestinations {
    pub fn builtin() -> Self {
        Self::from_names(DEFAULT_WELL_KNOWN.iter().copied())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect();
        Self { names }
    }

    pub fn is_well_known(&self, title: &str) -> bool {
        self.names.contains(&title.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for WellKnownDestinations {
    fn default() -> Self {
        Self::builtin()
    }
}
