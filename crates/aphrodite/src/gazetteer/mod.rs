//! City-name to coordinate resolution.
//!
//! Free-text birth places are matched against a fixed, curated table. The
//! rules run in a strict priority order and the first one to hit wins:
//!
//! 1. exact match on the normalized text
//! 2. substring containment in either direction
//! 3. alias lookup ("nyc", "la", ...) on any single word
//! 4. word-prefix match against the first word of multi-word city names
//!
//! Anything else resolves to [`DEFAULT_LOCATION`] with `matched == false`.
//! Resolution never fails.

pub mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use table::{CityEntry, ALIASES, CITIES};

/// Coordinate used when a city cannot be resolved (New York City).
pub const DEFAULT_LOCATION: (f64, f64) = (40.7128, -74.0060);

/// Shorter side of a word-prefix comparison must be at least this long
const MIN_PREFIX_LEN: usize = 4;

lazy_static::lazy_static! {
    static ref CITY_INDEX: HashMap<&'static str, &'static CityEntry> =
        CITIES.iter().map(|entry| (entry.0, entry)).collect();
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    pub lat: f64,
    pub lng: f64,
    pub matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_city_name: Option<String>,
}

impl ResolvedLocation {
    pub fn unmatched() -> Self {
        Self {
            lat: DEFAULT_LOCATION.0,
            lng: DEFAULT_LOCATION.1,
            matched: false,
            matched_city_name: None,
        }
    }

    fn from_entry(entry: &CityEntry) -> Self {
        Self {
            lat: entry.1,
            lng: entry.2,
            matched: true,
            matched_city_name: Some(display_name(entry.0)),
        }
    }
}

/// Lowercase, turn commas and periods into spaces, collapse runs of whitespace.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .replace([',', '.'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve free-text city input to coordinates.
pub fn resolve(city_text: &str) -> ResolvedLocation {
    let query = normalize(city_text);
    if query.is_empty() {
        return ResolvedLocation::unmatched();
    }

    let hit = exact_match(&query)
        .or_else(|| substring_match(&query))
        .or_else(|| alias_match(&query))
        .or_else(|| prefix_match(&query));

    match hit {
        Some(entry) => {
            log::debug!("gazetteer: {:?} -> {}", city_text, entry.0);
            ResolvedLocation::from_entry(entry)
        }
        None => {
            log::debug!("gazetteer: no match for {:?}, using default", city_text);
            ResolvedLocation::unmatched()
        }
    }
}

fn exact_match(query: &str) -> Option<&'static CityEntry> {
    CITY_INDEX.get(query).copied()
}

fn substring_match(query: &str) -> Option<&'static CityEntry> {
    let check_reverse = query.chars().count() >= MIN_PREFIX_LEN;
    CITIES
        .iter()
        .find(|(key, _, _)| query.contains(*key) || (check_reverse && key.contains(query)))
}

fn alias_match(query: &str) -> Option<&'static CityEntry> {
    let words: Vec<&str> = query.split(' ').collect();
    ALIASES
        .iter()
        .find(|(alias, _)| words.contains(alias))
        .and_then(|(_, city)| CITY_INDEX.get(city).copied())
}

fn prefix_match(query: &str) -> Option<&'static CityEntry> {
    for word in query.split(' ').filter(|w| w.chars().count() > 3) {
        let hit = CITIES.iter().find(|(key, _, _)| {
            let mut parts = key.split(' ');
            match (parts.next(), parts.next()) {
                (Some(first), Some(_)) => shares_prefix(word, first),
                _ => false,
            }
        });
        if hit.is_some() {
            return hit;
        }
    }
    None
}

fn shares_prefix(a: &str, b: &str) -> bool {
    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    shorter.chars().count() >= MIN_PREFIX_LEN && longer.starts_with(shorter)
}

/// "salt lake city" -> "Salt Lake City"
fn display_name(key: &str) -> String {
    key.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
