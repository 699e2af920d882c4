//! NACA 4-digit airfoil sampling

mod code;
mod outline;

pub use code::AirfoilCode;
pub use outline::{AirfoilOutline, sample, sample_closed};
