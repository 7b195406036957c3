use crate::chart::data::{PlacementSet, DEFAULT_TIME_OF_BIRTH};
use crate::ephemeris::{EphemerisError, EphemerisProvider, EphemerisSettings, GeoLocation, Origin, RawPlacements};
use crate::western::ZodiacSign;
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use thiserror::Error;

/// Errors that can occur while turning provider output into placements
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid time of birth {value:?}, expected HH:MM")]
    InvalidTime { value: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Provider returned no sign for required placement {body}")]
    MissingPlacement { body: String },
    #[error("Provider returned unrecognized sign {label:?} for {body}")]
    UnrecognizedSign { body: String, label: String },
    #[error("Ephemeris provider panicked: {message}")]
    ProviderPanicked { message: String },
}

/// Drives an [`EphemerisProvider`] and normalizes what it reports.
///
/// Errors are returned, never papered over; substituting a degraded chart
/// is [`FallbackChain`](crate::chart::FallbackChain)'s job.
pub struct ChartComputer<P> {
    provider: P,
    settings: EphemerisSettings,
}

impl<P: EphemerisProvider> ChartComputer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            settings: EphemerisSettings::natal(),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn compute(
        &self,
        date: NaiveDate,
        time: Option<&str>,
        location: GeoLocation,
    ) -> Result<PlacementSet, ChartError> {
        let time = parse_time(time)?;
        let origin = Origin {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
            lat: location.lat,
            lon: location.lon,
        };

        let raw = self.provider.compute_positions(&origin, &self.settings)?;
        normalize_placements(&raw)
    }
}

/// "HH:MM" -> time of day. Absent or blank means noon.
pub fn parse_time(time: Option<&str>) -> Result<NaiveTime, ChartError> {
    let value = time.map(str::trim).filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TIME_OF_BIRTH);
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ChartError::InvalidTime {
        value: value.to_string(),
    })
}

/// Map provider labels onto canonical signs.
///
/// Sun, moon and ascendant must resolve. Planets and the north node are
/// dropped when missing or unreadable, and the south node is always the
/// north node's opposite.
pub fn normalize_placements(raw: &RawPlacements) -> Result<PlacementSet, ChartError> {
    let sun = required(raw.body("sun"), "sun")?;
    let moon = required(raw.body("moon"), "moon")?;
    let rising = required(raw.ascendant.as_deref(), "ascendant")?;

    let north_node = optional(raw, "north_node");

    Ok(PlacementSet {
        sun,
        moon,
        rising,
        mercury: optional(raw, "mercury"),
        venus: optional(raw, "venus"),
        mars: optional(raw, "mars"),
        jupiter: optional(raw, "jupiter"),
        saturn: optional(raw, "saturn"),
        north_node,
        south_node: north_node.map(ZodiacSign::opposite),
    })
}

fn required(label: Option<&str>, body: &str) -> Result<ZodiacSign, ChartError> {
    let label = label.ok_or_else(|| ChartError::MissingPlacement {
        body: body.to_string(),
    })?;
    label.parse().map_err(|_| ChartError::UnrecognizedSign {
        body: body.to_string(),
        label: label.to_string(),
    })
}

fn optional(raw: &RawPlacements, body: &str) -> Option<ZodiacSign> {
    let label = raw.body(body)?;
    match label.parse() {
        Ok(sign) => Some(sign),
        Err(e) => {
            log::debug!("dropping {}: {}", body, e);
            None
        }
    }
}
