use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Moment and place a chart is cast for. Time is local civil time as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub lat: f64,
    pub lon: f64,
}

impl Origin {
    pub fn location(&self) -> GeoLocation {
        GeoLocation {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// Hour of day as a fraction, e.g. 14:30 -> 14.5
    pub fn decimal_hour(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0
    }
}

/// Settings for ephemeris calculations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Zodiac type: "tropical" or "sidereal"
    pub zodiac_type: String,
    /// House system name
    pub house_system: String,
    /// Aspect set to compute: "major" or "all"
    pub aspect_points: String,
    /// List of body IDs to include
    pub include_objects: Vec<String>,
}

/// Bodies read for a natal chart, in the order they are reported.
pub const NATAL_BODIES: &[&str] = &[
    "sun",
    "moon",
    "mercury",
    "venus",
    "mars",
    "jupiter",
    "saturn",
    "north_node",
];

impl EphemerisSettings {
    /// Tropical zodiac, Placidus houses, major aspects. Only sign placements
    /// are consumed downstream so this is not user configurable.
    pub fn natal() -> Self {
        Self {
            zodiac_type: "tropical".to_string(),
            house_system: "placidus".to_string(),
            aspect_points: "major".to_string(),
            include_objects: NATAL_BODIES.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Sign labels as reported by a provider, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPlacements {
    /// Body ID -> sign label
    pub bodies: BTreeMap<String, String>,
    /// Sign label on the eastern horizon
    pub ascendant: Option<String>,
}

impl RawPlacements {
    pub fn body(&self, id: &str) -> Option<&str> {
        self.bodies.get(id).map(String::as_str)
    }
}
