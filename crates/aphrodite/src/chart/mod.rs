pub mod computer;
pub mod data;
pub mod fallback;

pub use computer::{normalize_placements, parse_time, ChartComputer, ChartError};
pub use data::{
    BirthChartRequest, BirthChartResult, BirthInput, Coordinates, PlacementSet, ValidationError,
};
pub use fallback::FallbackChain;
