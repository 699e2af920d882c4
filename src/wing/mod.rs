//! Wing parameters, rib layout and mesh construction

mod builder;
mod params;
mod station;

pub use builder::{DEFAULT_RESOLUTION, MAX_RESOLUTION, WingMeshBuilder, build};
pub use params::{MAX_RIBS, WingParameters};
pub use station::{RibStation, rib_stations};
