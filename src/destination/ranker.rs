//! Ranking of curated matches and admitted fallback candidates.
//!
//! Curated order, strictest key first:
//!   category class → match strength → name length (shorter first)
//! Ties keep gazetteer order (stable sort). Fallback order: well-known
//! titles first, then everything else in provider order.

use super::allowlist::WellKnownDestinations;
use super::gazetteer::Gazetteer;
use super::matcher::{match_entry, MatchStrength};
use super::types::{Candidate, GazetteerEntry, RankedResultList};
use std::cmp::Reverse;

/// Match every gazetteer entry against `query` and return the ranked, capped hits.
///
/// `query` must already be normalized. An empty result means "fall back".
pub fn rank_curated(query: &str, gazetteer: &Gazetteer) -> RankedResultList {
    let mut hits: Vec<(&GazetteerEntry, MatchStrength)> = gazetteer
        .all_entries()
        .iter()
        .map(|e| (e, match_entry(query, e)))
        .filter(|(_, strength)| strength.is_match())
        .collect();

    hits.sort_by_key(|(entry, strength)| {
        (
            entry.category.rank_class(),
            Reverse(*strength),
            entry.name.chars().count(),
        )
    });

    RankedResultList::from_ordered(hits.into_iter().map(|(e, _)| Candidate::from(e)))
}

/// Order admitted fallback candidates: well-known titles first, provider order otherwise.
pub fn rank_external(admitted: Vec<Candidate>, well_known: &WellKnownDestinations) -> RankedResultList {
    let (boosted, rest): (Vec<Candidate>, Vec<Candidate>) = admitted
        .into_iter()
        .partition(|c| well_known.is_well_known(&c.title));
    RankedResultList::from_ordered(boosted.into_iter().chain(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::types::{Category, MAX_RESULTS};

    fn titles(list: &RankedResultList) -> Vec<&str> {
        list.iter().map(|c| c.title.as_str()).collect()
    }

    fn small_gazetteer() -> Gazetteer {
        Gazetteer::from_entries(vec![
            GazetteerEntry::new("Portland", "Oregon, United States", Category::City),
            GazetteerEntry::new("Port Louis", "Mauritius", Category::City),
            GazetteerEntry::new("Portugal", "Europe", Category::Country),
            GazetteerEntry::new("Newport", "Rhode Island, United States", Category::City),
            GazetteerEntry::new("Freeport", "Bahamas", Category::City),
        ])
        .unwrap()
    }

    #[test]
    fn test_category_beats_length() {
        let list = rank_curated("port", &small_gazetteer());
        assert_eq!(titles(&list)[0], "Portugal");
    }

    #[test]
    fn test_prefix_beats_substring_within_class() {
        let list = rank_curated("port", &small_gazetteer());
        // Cities: prefix hits first (shorter first), then substring hits (shorter first).
        assert_eq!(titles(&list), vec!["Portugal", "Portland", "Port Louis", "Newport", "Freeport"]);
    }

    #[test]
    fn test_shorter_name_wins_ties() {
        let g = Gazetteer::from_entries(vec![
            GazetteerEntry::new("Santa Barbara", "California, United States", Category::City),
            GazetteerEntry::new("Santa Fe", "New Mexico, United States", Category::City),
        ])
        .unwrap();
        assert_eq!(titles(&rank_curated("santa", &g)), vec!["Santa Fe", "Santa Barbara"]);
    }

    #[test]
    fn test_equal_keys_keep_table_order() {
        let list = rank_curated("new", &Gazetteer::builtin());
        let t = titles(&list);
        let jersey = t.iter().position(|n| *n == "New Jersey").unwrap();
        let mexico = t.iter().position(|n| *n == "New Mexico").unwrap();
        assert!(jersey < mexico);
    }

    #[test]
    fn test_curated_cap() {
        let list = rank_curated("a", &Gazetteer::builtin());
        assert_eq!(list.len(), MAX_RESULTS);
    }

    #[test]
    fn test_curated_miss_is_empty() {
        assert!(rank_curated("xyzzyx", &Gazetteer::builtin()).is_empty());
    }

    #[test]
    fn test_external_boost_then_provider_order() {
        let wk = WellKnownDestinations::from_names(["Paris", "Rome"]);
        let admitted = vec![
            Candidate::external("Parisville", "Ohio, United States"),
            Candidate::external("Rome", "Lazio, Italy"),
            Candidate::external("Paris Hills", "Ontario, Canada"),
            Candidate::external("Paris", "Île-de-France, France"),
        ];
        let list = rank_external(admitted, &wk);
        assert_eq!(titles(&list), vec!["Rome", "Paris", "Parisville", "Paris Hills"]);
    }

    #[test]
    fn test_external_dedupes_and_caps() {
        let wk = WellKnownDestinations::from_names(Vec::<String>::new());
        let mut admitted: Vec<Candidate> = (b'A'..=b'J')
            .map(|c| Candidate::external(format!("Town {}", c as char), "Somewhere"))
            .collect();
        admitted.insert(1, Candidate::external("Town A", "Somewhere"));
        let list = rank_external(admitted, &wk);
        assert_eq!(list.len(), MAX_RESULTS);
        assert_eq!(titles(&list)[..2], ["Town A", "Town B"]);
    }
}
