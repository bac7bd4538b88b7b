//! Waypoint — destination autocomplete for trip requests.
//!
//! A curated gazetteer answers typed prefixes with countries, states and
//! cities; a filtered external geocoder covers everything else.

pub mod config;
pub mod destination;
pub mod logging;
pub mod server;
