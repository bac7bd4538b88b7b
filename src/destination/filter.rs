//! Noise filter for results from the external geocoding provider.
//!
//! The provider happily returns street addresses, airports, malls and
//! businesses. Everything here is table-driven: the rules are data in
//! [`NoiseRules`], the predicate just walks them.

use super::types::Candidate;
use std::collections::HashSet;
use std::fmt;

const STREET_SUFFIXES: &[&str] = &[
    "st", "ave", "rd", "dr", "ln", "blvd", "street", "avenue", "road", "drive",
    "lane", "boulevard", "way", "place", "court", "circle",
];

const NON_DESTINATION_KEYWORDS: &[&str] = &[
    "airport", "station", "terminal", "depot", "stop", "platform", "rail",
    "train", "metro", "subway", "bus", "mall", "plaza", "shopping", "center",
    "centre",
    // enclave-style neighborhoods ("Little Italy", "Little Havana")
    "little",
];

const BUSINESS_CHARS: &[char] = &['&', '/', '#'];

const BUSINESS_WORDS: &[&str] = &["llc", "inc", "corp", "ltd", "building", "tower", "complex"];

/// Matched against raw whitespace-separated words so the trailing dot counts.
const BUSINESS_ABBREVIATIONS: &[&str] = &["co."];

const POI_TIER_MARKER: &str = "nearby";

const MIN_TITLE_CHARS: usize = 2;
const MAX_TITLE_CHARS: usize = 50;

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Unreadable,
    Digit,
    StreetSuffix(String),
    NonDestination(String),
    PoiTier,
    Business(String),
    TitleLength(usize),
    NoRegionContext,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable => write!(f, "contains control characters"),
            Self::Digit => write!(f, "title contains a digit"),
            Self::StreetSuffix(w) => write!(f, "street suffix '{}'", w),
            Self::NonDestination(w) => write!(f, "non-destination keyword '{}'", w),
            Self::PoiTier => write!(f, "provider marked it as nearby"),
            Self::Business(w) => write!(f, "business marker '{}'", w),
            Self::TitleLength(n) => write!(f, "title length {} out of range", n),
            Self::NoRegionContext => write!(f, "no region context"),
        }
    }
}

/// The rule tables driving the filter.
#[derive(Debug, Clone)]
pub struct NoiseRules {
    street_suffixes: HashSet<String>,
    /// Checked in order, as plain substrings of the lower-cased text.
    keywords: Vec<String>,
    business_chars: Vec<char>,
    business_words: HashSet<String>,
    business_abbreviations: HashSet<String>,
}

impl Default for NoiseRules {
    fn default() -> Self {
        Self {
            street_suffixes: to_set(STREET_SUFFIXES),
            keywords: NON_DESTINATION_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            business_chars: BUSINESS_CHARS.to_vec(),
            business_words: to_set(BUSINESS_WORDS),
            business_abbreviations: to_set(BUSINESS_ABBREVIATIONS),
        }
    }
}

fn to_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl NoiseRules {
    /// Add a non-destination keyword (matched anywhere in title or subtitle).
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() && !self.keywords.contains(&keyword) {
            self.keywords.push(keyword);
        }
        self
    }

    /// Add a street suffix (matched as a whole word in the title).
    pub fn with_street_suffix(mut self, suffix: &str) -> Self {
        self.street_suffixes.insert(suffix.trim().to_lowercase());
        self
    }

    /// Admission predicate: `true` only if no rule rejects the candidate.
    pub fn admit(&self, candidate: &Candidate) -> bool {
        self.check(candidate).is_ok()
    }

    /// Run every rule in order; the first failing rule is reported.
    pub fn check(&self, candidate: &Candidate) -> Result<(), Rejection> {
        let title = candidate.title.trim();
        let subtitle = candidate.subtitle.trim();

        if title.chars().chain(subtitle.chars()).any(char::is_control) {
            return Err(Rejection::Unreadable);
        }

        if title.chars().any(char::is_numeric) {
            return Err(Rejection::Digit);
        }

        let title_words = words(title);
        let subtitle_words = words(subtitle);

        if let Some(w) = title_words.iter().find(|w| self.street_suffixes.contains(*w)) {
            return Err(Rejection::StreetSuffix(w.clone()));
        }

        let title_lc = title.to_lowercase();
        let subtitle_lc = subtitle.to_lowercase();
        if let Some(k) = self
            .keywords
            .iter()
            .find(|k| title_lc.contains(k.as_str()) || subtitle_lc.contains(k.as_str()))
        {
            return Err(Rejection::NonDestination(k.clone()));
        }

        if subtitle_words.iter().any(|w| w == POI_TIER_MARKER) {
            return Err(Rejection::PoiTier);
        }

        if let Some(marker) = self.business_marker(title, &title_words)
            .or_else(|| self.business_marker(subtitle, &subtitle_words))
        {
            return Err(Rejection::Business(marker));
        }

        let len = title.chars().count();
        if !(MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&len) {
            return Err(Rejection::TitleLength(len));
        }

        if !title.contains(',') && subtitle.is_empty() {
            return Err(Rejection::NoRegionContext);
        }

        Ok(())
    }

    fn business_marker(&self, text: &str, text_words: &[String]) -> Option<String> {
        if let Some(c) = text.chars().find(|c| self.business_chars.contains(c)) {
            return Some(c.to_string());
        }
        if let Some(w) = text_words.iter().find(|w| self.business_words.contains(*w)) {
            return Some(w.clone());
        }
        text.split_whitespace()
            .map(|raw| raw.trim_end_matches(',').to_lowercase())
            .find(|raw| self.business_abbreviations.contains(raw))
    }
}

/// Lower-cased words of `text`; apostrophes stay inside words ("o'hare").
fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '\u{2019}'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Admit `candidate` under the default rule tables.
pub fn admit(candidate: &Candidate) -> bool {
    NoiseRules::default().admit(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(title: &str, subtitle: &str) -> Candidate {
        Candidate::external(title, subtitle)
    }

    fn rejection(title: &str, subtitle: &str) -> Rejection {
        NoiseRules::default().check(&c(title, subtitle)).unwrap_err()
    }

    #[test]
    fn test_admits_plain_destination() {
        assert!(admit(&c("Springfield", "Illinois, United States")));
        assert!(admit(&c("Norway House", "Manitoba, Canada")));
    }

    #[test]
    fn test_keywords_match_inside_words() {
        assert_eq!(
            rejection("Westfield Southcenter", "Tukwila, Washington, United States"),
            Rejection::NonDestination("center".into())
        );
        assert_eq!(
            rejection("Railway Museum", "York, England, United Kingdom"),
            Rejection::NonDestination("rail".into())
        );
        assert_eq!(
            rejection("Trainworld", "Schaerbeek, Brussels, Belgium"),
            Rejection::NonDestination("train".into())
        );
        assert_eq!(
            rejection("Metrorail", "Miami, Florida, United States"),
            Rejection::NonDestination("rail".into())
        );
        assert_eq!(
            rejection("Littleton", "Colorado, United States"),
            Rejection::NonDestination("little".into())
        );
        assert!(!admit(&c("Columbus", "Ohio, United States")));
    }

    #[test]
    fn test_rejects_street() {
        assert_eq!(
            rejection("Chicago Ave", "Evanston, IL, United States"),
            Rejection::StreetSuffix("ave".into())
        );
        assert!(!admit(&c("Main Street", "Springfield, IL")));
        assert!(!admit(&c("Abbey Road", "London, England")));
    }

    #[test]
    fn test_street_suffix_is_whole_word() {
        // "way" inside "Broadway" / "Norway" is not a suffix.
        assert!(admit(&c("Norway", "Maine, United States")));
        assert!(admit(&c("Stanford", "California, United States")));
    }

    #[test]
    fn test_rejects_transit_and_poi() {
        assert_eq!(rejection("O'Hare Airport", "Chicago, IL"), Rejection::NonDestination("airport".into()));
        assert!(!admit(&c("Union Station", "Washington, DC")));
        assert!(!admit(&c("Mall of America", "Bloomington, MN")));
        assert!(!admit(&c("Rockefeller Center", "New York, NY")));
    }

    #[test]
    fn test_keyword_in_subtitle() {
        assert!(!admit(&c("Gate A", "Heathrow Airport, London")));
    }

    #[test]
    fn test_rejects_enclave_neighborhood() {
        assert_eq!(rejection("Little Italy", "New York, NY"), Rejection::NonDestination("little".into()));
    }

    #[test]
    fn test_rejects_digits() {
        assert_eq!(rejection("123 Broadway", "New York, NY"), Rejection::Digit);
    }

    #[test]
    fn test_rejects_nearby_tier() {
        assert_eq!(rejection("Blue Lagoon", "Search Nearby"), Rejection::PoiTier);
    }

    #[test]
    fn test_rejects_business() {
        assert_eq!(rejection("Smith & Sons", "Boston, MA"), Rejection::Business("&".into()));
        assert!(!admit(&c("Acme Inc", "Denver, CO")));
        assert!(!admit(&c("Willis Tower", "Chicago, IL")));
        assert!(!admit(&c("Tokyo Trading Co.", "Tokyo, Japan")));
        assert!(!admit(&c("Gates", "Suite #4, Seattle")));
    }

    #[test]
    fn test_title_length_bounds() {
        assert_eq!(rejection("X", "Somewhere"), Rejection::TitleLength(1));
        let long = "A".repeat(51);
        assert_eq!(rejection(&long, "Somewhere"), Rejection::TitleLength(51));
        assert!(admit(&c("Ai", "Somewhere")));
    }

    #[test]
    fn test_requires_region_context() {
        assert_eq!(rejection("Springfield", ""), Rejection::NoRegionContext);
        assert_eq!(rejection("Springfield", "   "), Rejection::NoRegionContext);
        assert!(admit(&c("Springfield, Illinois", "")));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert_eq!(rejection("Paris\u{0}", "France"), Rejection::Unreadable);
    }

    #[test]
    fn test_extended_rules() {
        let rules = NoiseRules::default().with_keyword("Pier").with_street_suffix("terrace");
        assert!(!rules.admit(&c("Navy Pier", "Chicago, IL")));
        assert!(!rules.admit(&c("Oak Terrace", "Leeds, England")));
        assert!(admit(&c("Navy Pier", "Chicago, IL")));
    }
}
