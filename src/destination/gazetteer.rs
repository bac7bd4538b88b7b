//! Curated gazetteer: the built-in table of canonical destinations.
//!
//! Read-only after construction. Shared across concurrent resolutions
//! behind an `Arc` without locking.

use super::types::{Category, DuplicateEntry, GazetteerEntry};
use std::collections::HashSet;

// ─── Built-in dataset ───────────────────────────────────────────

struct BuiltinDestination {
    name: &'static str,
    parent: &'static str,
    category: Category,
}

const fn country(name: &'static str, continent: &'static str) -> BuiltinDestination {
    BuiltinDestination { name, parent: continent, category: Category::Country }
}

const fn state(name: &'static str, parent: &'static str) -> BuiltinDestination {
    BuiltinDestination { name, parent, category: Category::StateOrProvince }
}

const fn city(name: &'static str, parent: &'static str) -> BuiltinDestination {
    BuiltinDestination { name, parent, category: Category::City }
}

const BUILTIN_DESTINATIONS: &[BuiltinDestination] = &[
    // Countries
    country("United States", "North America"),
    country("Canada", "North America"),
    country("Mexico", "North America"),
    country("Costa Rica", "North America"),
    country("Jamaica", "North America"),
    country("Brazil", "South America"),
    country("Argentina", "South America"),
    country("Peru", "South America"),
    country("Colombia", "South America"),
    country("United Kingdom", "Europe"),
    country("Ireland", "Europe"),
    country("France", "Europe"),
    country("Germany", "Europe"),
    country("Italy", "Europe"),
    country("Spain", "Europe"),
    country("Portugal", "Europe"),
    country("Greece", "Europe"),
    country("Netherlands", "Europe"),
    country("Switzerland", "Europe"),
    country("Austria", "Europe"),
    country("Sweden", "Europe"),
    country("Norway", "Europe"),
    country("Denmark", "Europe"),
    country("Iceland", "Europe"),
    country("Croatia", "Europe"),
    country("Turkey", "Asia"),
    country("Japan", "Asia"),
    country("South Korea", "Asia"),
    country("Thailand", "Asia"),
    country("Vietnam", "Asia"),
    country("India", "Asia"),
    country("Indonesia", "Asia"),
    country("Singapore", "Asia"),
    country("United Arab Emirates", "Asia"),
    country("Saudi Arabia", "Asia"),
    country("Egypt", "Africa"),
    country("Morocco", "Africa"),
    country("Kenya", "Africa"),
    country("South Africa", "Africa"),
    country("Australia", "Oceania"),
    country("New Zealand", "Oceania"),
    // States and provinces
    state("California", "United States"),
    state("Florida", "United States"),
    state("Hawaii", "United States"),
    state("Texas", "United States"),
    state("New York", "United States"),
    state("New Jersey", "United States"),
    state("New Mexico", "United States"),
    state("New Hampshire", "United States"),
    state("Illinois", "United States"),
    state("Colorado", "United States"),
    state("Arizona", "United States"),
    state("Nevada", "United States"),
    state("Washington", "United States"),
    state("Massachusetts", "United States"),
    state("Louisiana", "United States"),
    state("Tennessee", "United States"),
    state("Alaska", "United States"),
    state("Oregon", "United States"),
    state("Utah", "United States"),
    state("Ontario", "Canada"),
    state("Quebec", "Canada"),
    state("British Columbia", "Canada"),
    state("Alberta", "Canada"),
    state("Nova Scotia", "Canada"),
    state("Newfoundland and Labrador", "Canada"),
    state("Quintana Roo", "Mexico"),
    state("New South Wales", "Australia"),
    state("Queensland", "Australia"),
    state("Victoria", "Australia"),
    state("England", "United Kingdom"),
    state("Scotland", "United Kingdom"),
    state("Bavaria", "Germany"),
    state("Tuscany", "Italy"),
    state("Catalonia", "Spain"),
    state("Andalusia", "Spain"),
    state("Bali", "Indonesia"),
    // Cities
    city("Chicago", "Illinois, United States"),
    city("Springfield", "Illinois, United States"),
    city("New York City", "New York, United States"),
    city("Los Angeles", "California, United States"),
    city("San Francisco", "California, United States"),
    city("San Diego", "California, United States"),
    city("Miami", "Florida, United States"),
    city("Orlando", "Florida, United States"),
    city("Honolulu", "Hawaii, United States"),
    city("Austin", "Texas, United States"),
    city("Denver", "Colorado, United States"),
    city("Las Vegas", "Nevada, United States"),
    city("Seattle", "Washington, United States"),
    city("Boston", "Massachusetts, United States"),
    city("New Orleans", "Louisiana, United States"),
    city("Nashville", "Tennessee, United States"),
    city("Toronto", "Ontario, Canada"),
    city("Montreal", "Quebec, Canada"),
    city("Vancouver", "British Columbia, Canada"),
    city("Mexico City", "Mexico"),
    city("Cancún", "Quintana Roo, Mexico"),
    city("Rio de Janeiro", "Brazil"),
    city("Buenos Aires", "Argentina"),
    city("Lima", "Peru"),
    city("London", "England, United Kingdom"),
    city("Edinburgh", "Scotland, United Kingdom"),
    city("Dublin", "Ireland"),
    city("Paris", "France"),
    city("Nice", "France"),
    city("Berlin", "Germany"),
    city("Munich", "Bavaria, Germany"),
    city("Rome", "Italy"),
    city("Florence", "Tuscany, Italy"),
    city("Venice", "Italy"),
    city("Milan", "Italy"),
    city("Madrid", "Spain"),
    city("Barcelona", "Catalonia, Spain"),
    city("Seville", "Andalusia, Spain"),
    city("Lisbon", "Portugal"),
    city("Athens", "Greece"),
    city("Santorini", "Greece"),
    city("Amsterdam", "Netherlands"),
    city("Zurich", "Switzerland"),
    city("Vienna", "Austria"),
    city("Stockholm", "Sweden"),
    city("Oslo", "Norway"),
    city("Copenhagen", "Denmark"),
    city("Reykjavik", "Iceland"),
    city("Dubrovnik", "Croatia"),
    city("Istanbul", "Turkey"),
    city("Tokyo", "Japan"),
    city("Kyoto", "Japan"),
    city("Osaka", "Japan"),
    city("Seoul", "South Korea"),
    city("Bangkok", "Thailand"),
    city("Hanoi", "Vietnam"),
    city("Mumbai", "India"),
    city("New Delhi", "India"),
    city("Dubai", "United Arab Emirates"),
    city("Mecca", "Saudi Arabia"),
    city("Medina", "Saudi Arabia"),
    city("Cairo", "Egypt"),
    city("Marrakesh", "Morocco"),
    city("Nairobi", "Kenya"),
    city("Cape Town", "South Africa"),
    city("Sydney", "New South Wales, Australia"),
    city("Melbourne", "Victoria, Australia"),
    city("Auckland", "New Zealand"),
    city("Queenstown", "New Zealand"),
];

/// The curated destination store.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    /// The built-in table only.
    pub fn builtin() -> Self {
        let entries = BUILTIN_DESTINATIONS
            .iter()
            .map(|d| GazetteerEntry::new(d.name, d.parent, d.category))
            .collect();
        Self { entries }
    }

    /// Build a store from arbitrary entries, rejecting repeated `(name, parent_region)` pairs.
    pub fn from_entries(entries: Vec<GazetteerEntry>) -> Result<Self, DuplicateEntry> {
        let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(entries.len());
        for e in &entries {
            if !seen.insert((e.name.as_str(), e.parent_region.as_str())) {
                return Err(DuplicateEntry {
                    name: e.name.clone(),
                    parent_region: e.parent_region.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// The built-in table followed by `extra`, in that order.
    pub fn builtin_with(extra: Vec<GazetteerEntry>) -> Result<Self, DuplicateEntry> {
        let mut entries = Self::builtin().entries;
        entries.extend(extra);
        Self::from_entries(entries)
    }

    /// Every entry, in stable table order.
    pub fn all_entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
