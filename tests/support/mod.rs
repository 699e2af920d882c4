//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use wingcraft::{WingParameters, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// The reference wing: NACA 2412, 2000 mm span, 800 mm root, taper 0.6, 8 ribs.
pub fn reference_wing() -> WingParameters {
    WingParameters {
        airfoil_type: "NACA 2412".to_string(),
        wingspan: 2000.0,
        root_chord: 800.0,
        tip_chord: None,
        taper_ratio: 0.6,
        sweep_angle: 0.0,
        dihedral_angle: 0.0,
        n_ribs: 8,
        ..WingParameters::default()
    }
}

/// Chordwise extent (max x - min x) of rib `rib` in a mesh with `per_rib` points per rib.
pub fn rib_chord(vertices: &[nalgebra::Point3<Real>], rib: usize, per_rib: usize) -> Real {
    let slice = &vertices[rib * per_rib..(rib + 1) * per_rib];
    let min = slice.iter().map(|p| p.x).fold(Real::MAX, Real::min);
    let max = slice.iter().map(|p| p.x).fold(-Real::MAX, Real::max);
    max - min
}
