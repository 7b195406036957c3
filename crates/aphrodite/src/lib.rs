pub mod chart;
pub mod ephemeris;
pub mod gazetteer;
pub mod synastry;
pub mod western;

pub use chart::{
    BirthChartRequest, BirthChartResult, BirthInput, ChartComputer, ChartError, FallbackChain,
    ValidationError,
};
pub use ephemeris::{EphemerisError, EphemerisProvider, UnavailableEphemeris};
pub use gazetteer::{resolve, ResolvedLocation, DEFAULT_LOCATION};
pub use western::{classify, classify_date, Element, ZodiacSign};

/// Sun-sign approximation for callers that cannot reach an ephemeris at all:
/// sun from the date table, moon and rising copied from it, coordinates from
/// the local gazetteer.
pub fn approximate_chart(input: &BirthInput) -> BirthChartResult {
    let location = gazetteer::resolve(&input.city_of_birth);
    let sun = classify_date(input.date_of_birth);
    BirthChartResult::assemble(chart::PlacementSet::sun_only(sun), &location)
}
