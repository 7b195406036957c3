use crate::gazetteer::ResolvedLocation;
use crate::western::ZodiacSign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_TIME_OF_BIRTH: &str = "12:00";

/// Input was rejected before any chart work started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dateOfBirth is required")]
    MissingDate,
    #[error("dateOfBirth {value:?} is not a valid YYYY-MM-DD date")]
    MalformedDate { value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        "dateOfBirth"
    }
}

/// `POST /birth-chart` body as it arrives on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChartRequest {
    pub date_of_birth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_of_birth: Option<String>,
    #[serde(default)]
    pub city_of_birth: String,
}

/// Validated birth data.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub date_of_birth: NaiveDate,
    /// "HH:MM", parsed when the chart is computed. `None` means noon.
    pub time_of_birth: Option<String>,
    pub city_of_birth: String,
}

impl BirthInput {
    pub fn new(date_of_birth: NaiveDate) -> Self {
        Self {
            date_of_birth,
            time_of_birth: None,
            city_of_birth: String::new(),
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time_of_birth = Some(time.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city_of_birth = city.into();
        self
    }

    /// Blank times count as absent.
    pub fn time(&self) -> Option<&str> {
        self.time_of_birth
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn to_request(&self) -> BirthChartRequest {
        BirthChartRequest {
            date_of_birth: self.date_of_birth.format(DATE_FORMAT).to_string(),
            time_of_birth: self.time_of_birth.clone(),
            city_of_birth: self.city_of_birth.clone(),
        }
    }
}

impl TryFrom<BirthChartRequest> for BirthInput {
    type Error = ValidationError;

    fn try_from(req: BirthChartRequest) -> Result<Self, Self::Error> {
        let raw = req.date_of_birth.trim();
        if raw.is_empty() {
            return Err(ValidationError::MissingDate);
        }
        let date_of_birth = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
            ValidationError::MalformedDate {
                value: req.date_of_birth.clone(),
            }
        })?;
        Ok(BirthInput {
            date_of_birth,
            time_of_birth: req.time_of_birth,
            city_of_birth: req.city_of_birth,
        })
    }
}

/// Signs read off a successful ephemeris computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSet {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
    pub mercury: Option<ZodiacSign>,
    pub venus: Option<ZodiacSign>,
    pub mars: Option<ZodiacSign>,
    pub jupiter: Option<ZodiacSign>,
    pub saturn: Option<ZodiacSign>,
    pub north_node: Option<ZodiacSign>,
    pub south_node: Option<ZodiacSign>,
}

impl PlacementSet {
    /// Sun-sign-only stand-in: moon and rising copy the sun, nothing else is known.
    pub fn sun_only(sun: ZodiacSign) -> Self {
        Self {
            sun,
            moon: sun,
            rising: sun,
            mercury: None,
            venus: None,
            mars: None,
            jupiter: None,
            saturn: None,
            north_node: None,
            south_node: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthChartResult {
    pub sun: ZodiacSign,
    pub moon: ZodiacSign,
    pub rising: ZodiacSign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mercury: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venus: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mars: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jupiter: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturn: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub north_node: Option<ZodiacSign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub south_node: Option<ZodiacSign>,
    pub coordinates: Coordinates,
    pub location_matched: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_city: Option<String>,
}

impl BirthChartResult {
    pub fn assemble(placements: PlacementSet, location: &ResolvedLocation) -> Self {
        Self {
            sun: placements.sun,
            moon: placements.moon,
            rising: placements.rising,
            mercury: placements.mercury,
            venus: placements.venus,
            mars: placements.mars,
            jupiter: placements.jupiter,
            saturn: placements.saturn,
            north_node: placements.north_node,
            south_node: placements.south_node,
            coordinates: Coordinates {
                lat: location.lat,
                lng: location.lng,
            },
            location_matched: location.matched,
            matched_city: location.matched_city_name.clone(),
        }
    }

    /// True when moon and rising are copies of the sun and no planets are known,
    /// which is what every fallback path produces.
    pub fn is_sun_sign_only(&self) -> bool {
        self.sun == self.moon
            && self.sun == self.rising
            && self.mercury.is_none()
            && self.venus.is_none()
            && self.mars.is_none()
            && self.jupiter.is_none()
            && self.saturn.is_none()
            && self.north_node.is_none()
    }
}
