use crate::ephemeris::types::{EphemerisSettings, Origin, RawPlacements};
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Unsupported zodiac type: {zodiac_type}")]
    UnsupportedZodiac { zodiac_type: String },
    #[error("Invalid origin {year:04}-{month:02}-{day:02} {hour:02}:{minute:02}: {message}")]
    InvalidOrigin {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        message: String,
    },
    #[error("Failed to calculate position for {body_id}: {message}")]
    CalculationFailed { body_id: String, message: String },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Ephemeris provider unavailable: {reason}")]
    Unavailable { reason: String },
}

impl EphemerisError {
    pub fn invalid_origin(origin: &Origin, message: impl Into<String>) -> Self {
        EphemerisError::InvalidOrigin {
            year: origin.year,
            month: origin.month,
            day: origin.day,
            hour: origin.hour,
            minute: origin.minute,
            message: message.into(),
        }
    }
}

/// Source of sign placements for a moment and place.
///
/// Implementations are synchronous and CPU-bound. They report sign labels
/// only; normalizing those labels is the caller's job.
pub trait EphemerisProvider: Send + Sync {
    fn name(&self) -> &str;

    fn compute_positions(
        &self,
        origin: &Origin,
        settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for std::sync::Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compute_positions(
        &self,
        origin: &Origin,
        settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError> {
        (**self).compute_positions(origin, settings)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn compute_positions(
        &self,
        origin: &Origin,
        settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError> {
        (**self).compute_positions(origin, settings)
    }
}

/// Provider used when no ephemeris backend is configured or it failed to load.
/// Every call fails, so charts come back in their degraded sun-sign form.
#[derive(Debug, Clone)]
pub struct UnavailableEphemeris {
    reason: String,
}

impl UnavailableEphemeris {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl EphemerisProvider for UnavailableEphemeris {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn compute_positions(
        &self,
        _origin: &Origin,
        _settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError> {
        Err(EphemerisError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}
