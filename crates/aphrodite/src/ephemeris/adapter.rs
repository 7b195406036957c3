use crate::ephemeris::provider::{EphemerisError, EphemerisProvider};
use crate::ephemeris::types::{EphemerisSettings, Origin, RawPlacements};
use crate::western::ZodiacSign;
use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use swisseph::swe::{calc_ut, houses_ex, julday, set_ephe_path};
use swisseph::AscMc;

/// Swiss Ephemeris body codes: SUN=0 .. SATURN=6, TRUE_NODE=11
const BODY_IDS: &[(&str, i32)] = &[
    ("sun", 0),
    ("moon", 1),
    ("mercury", 2),
    ("venus", 3),
    ("mars", 4),
    ("jupiter", 5),
    ("saturn", 6),
    ("uranus", 7),
    ("neptune", 8),
    ("pluto", 9),
    ("north_node", 11),
];

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
];

/// FLG_SWIEPH: read positions from the Swiss Ephemeris data files
const FLG_SWIEPH: i32 = 2;
/// GREG_CAL
const GREGORIAN: u32 = 1;

const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path.
    ///
    /// Without an explicit path, `SWISS_EPHEMERIS_PATH` is consulted, then the
    /// conventional system location.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        set_ephe_path(&path.to_string_lossy());
        log::info!("Swiss Ephemeris data at {}", path.display());
        Ok(Self {
            ephemeris_path: path,
        })
    }

    fn calc_body_longitude(&self, body_id: &str, jd: f64) -> Result<f64, EphemerisError> {
        let code = BODY_IDS
            .iter()
            .find(|(id, _)| *id == body_id)
            .map(|(_, code)| *code)
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body_id: body_id.to_string(),
                message: format!("Unknown body ID: {}", body_id),
            })?;

        let result = calc_ut(jd, code as u32, FLG_SWIEPH as u32).map_err(|e| {
            EphemerisError::CalculationFailed {
                body_id: body_id.to_string(),
                message: format!(
                    "Swiss Ephemeris error (data at {}): {}",
                    self.ephemeris_path.display(),
                    e
                ),
            }
        })?;

        Ok(result.out[0] % 360.0)
    }

    fn calc_ascendant(&self, jd: f64, origin: &Origin, house_system: u8) -> Result<f64, EphemerisError> {
        let geo = origin.location();
        let (_cusps, angles) = houses_ex(jd, FLG_SWIEPH, geo.lat, geo.lon, house_system as i32);
        let ascendant = AscMc::from_array(angles).ascendant;
        if !ascendant.is_finite() {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!("non-finite ascendant at lat {} lon {}", geo.lat, geo.lon),
            });
        }
        Ok(ascendant % 360.0)
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn name(&self) -> &str {
        "swiss-ephemeris"
    }

    fn compute_positions(
        &self,
        origin: &Origin,
        settings: &EphemerisSettings,
    ) -> Result<RawPlacements, EphemerisError> {
        if !settings.zodiac_type.eq_ignore_ascii_case("tropical") {
            return Err(EphemerisError::UnsupportedZodiac {
                zodiac_type: settings.zodiac_type.clone(),
            });
        }
        let house_system = get_house_system_byte(&settings.house_system)?;
        let jd = origin_to_julian_day(origin)?;

        let mut bodies = BTreeMap::new();
        for body_id in &settings.include_objects {
            let body_id = body_id.to_lowercase();
            match self.calc_body_longitude(&body_id, jd) {
                Ok(lon) => {
                    bodies.insert(body_id, ZodiacSign::from_longitude(lon).name().to_string());
                }
                // Sun and moon are load-bearing; let the caller decide
                Err(e) => log::debug!("skipping {}: {}", body_id, e),
            }
        }

        let ascendant = self.calc_ascendant(jd, origin, house_system)?;

        Ok(RawPlacements {
            bodies,
            ascendant: Some(ZodiacSign::from_longitude(ascendant).name().to_string()),
        })
    }
}

/// Convert the origin's civil date and time to a Julian Day, treating the
/// time as universal time.
fn origin_to_julian_day(origin: &Origin) -> Result<f64, EphemerisError> {
    NaiveDate::from_ymd_opt(origin.year, origin.month, origin.day)
        .ok_or_else(|| EphemerisError::invalid_origin(origin, "no such calendar date"))?;
    NaiveTime::from_hms_opt(origin.hour, origin.minute, 0)
        .ok_or_else(|| EphemerisError::invalid_origin(origin, "no such time of day"))?;

    Ok(julday(
        origin.year,
        origin.month as i32,
        origin.day as i32,
        origin.decimal_hour(),
        GREGORIAN,
    ))
}

/// Convert house system string to byte format
fn get_house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}
