use crate::chart::computer::{ChartComputer, ChartError};
use crate::chart::data::{BirthChartResult, BirthInput, PlacementSet};
use crate::ephemeris::{EphemerisProvider, GeoLocation};
use crate::gazetteer::{self, ResolvedLocation};
use crate::western::classify_date;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Wraps [`ChartComputer`] so that a chart is always produced.
///
/// Any computation failure, provider panics included, degrades the chart to
/// its sun sign (moon and rising copy the sun). Location fields are resolved
/// before the ephemeris is touched and survive the degradation unchanged.
pub struct FallbackChain<P> {
    computer: ChartComputer<P>,
}

impl<P: EphemerisProvider> FallbackChain<P> {
    pub fn new(provider: P) -> Self {
        Self {
            computer: ChartComputer::new(provider),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.computer.provider().name()
    }

    pub fn safe_compute(&self, input: &BirthInput) -> BirthChartResult {
        let location = gazetteer::resolve(&input.city_of_birth);
        if !location.matched && !input.city_of_birth.trim().is_empty() {
            log::info!(
                "city {:?} not in gazetteer, using default coordinates",
                input.city_of_birth
            );
        }

        let placements = match self.try_compute(input, &location) {
            Ok(placements) => placements,
            Err(e) => {
                log::warn!(
                    "chart computation failed for {}, falling back to sun sign: {}",
                    input.date_of_birth,
                    e
                );
                PlacementSet::sun_only(classify_date(input.date_of_birth))
            }
        };

        BirthChartResult::assemble(placements, &location)
    }

    fn try_compute(
        &self,
        input: &BirthInput,
        location: &ResolvedLocation,
    ) -> Result<PlacementSet, ChartError> {
        let geo = GeoLocation {
            lat: location.lat,
            lon: location.lng,
        };
        panic::catch_unwind(AssertUnwindSafe(|| {
            self.computer.compute(input.date_of_birth, input.time(), geo)
        }))
        .unwrap_or_else(|payload| {
            Err(ChartError::ProviderPanicked {
                message: panic_message(payload.as_ref()),
            })
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
