//! Parametric **wing mesh generation** for aircraft wing configurators.
//!
//! A [`WingParameters`] snapshot (airfoil designator, span, chords, taper,
//! sweep, dihedral, rib count) is turned into an indexed triangle
//! [`WingMesh`]: a NACA 4-digit outline is sampled once, placed at evenly
//! spaced rib stations, and consecutive ribs are stitched into a skin.
//!
//! ```
//! use wingcraft::{WingParameters, wing::WingMeshBuilder};
//!
//! let params = WingParameters::default(); // NACA 2412, 2000 mm span, 8 ribs
//! let mesh = WingMeshBuilder::new().build(&params).unwrap();
//! assert_eq!(mesh.vertex_count(), 400);
//! assert_eq!(mesh.triangle_count(), 686);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - [**gltf-io**](https://www.khronos.org/gltf/): `.gltf` export with embedded buffers
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aircraft;
pub mod airfoil;
pub mod errors;
pub mod float_types;
pub mod generation;
pub mod io;
pub mod mesh;
pub mod state;
pub mod triangulated;
pub mod wing;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use aircraft::{AircraftConfig, AircraftKind};
pub use airfoil::{AirfoilCode, AirfoilOutline};
pub use errors::WingError;
pub use mesh::WingMesh;
pub use wing::WingParameters;
