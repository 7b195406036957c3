pub mod provider;
pub mod types;

#[cfg(feature = "swiss-ephemeris")]
pub mod adapter;

#[cfg(feature = "swiss-ephemeris")]
pub use adapter::SwissEphemerisAdapter;
pub use provider::{EphemerisError, EphemerisProvider, UnavailableEphemeris};
pub use types::{EphemerisSettings, GeoLocation, Origin, RawPlacements, NATAL_BODIES};
