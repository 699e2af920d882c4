//! Wing parameter sets

use crate::airfoil::AirfoilCode;
use crate::errors::WingError;
use crate::float_types::{Real, tolerance};
use serde::{Deserialize, Serialize};

/// Upper bound on `n_ribs` accepted by [`WingParameters::validate`].
pub const MAX_RIBS: usize = 1024;

/// The complete description of one half-wing.
///
/// Lengths are millimeters, angles are degrees. Only the geometric subset
/// (`airfoil_type` through `n_ribs`) feeds mesh generation; structural,
/// material and appearance fields travel alongside untouched.
///
/// Serialized with the camelCase field names used by the configurator front
/// end and the generation prompt (`airfoilType`, `rootChord`, `nRibs`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WingParameters {
    /// Free-text designator such as `"NACA 2412"`.
    pub airfoil_type: String,

    pub wingspan: Real,
    pub root_chord: Real,
    /// Optional on input; see [`WingParameters::normalized`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip_chord: Option<Real>,
    /// Tip chord divided by root chord.
    pub taper_ratio: Real,

    pub sweep_angle: Real,
    pub dihedral_angle: Real,

    pub n_ribs: usize,
    #[serde(default = "default_spar_count")]
    pub spar_count: usize,

    #[serde(default)]
    pub has_lightening_holes: bool,
    #[serde(default)]
    pub hole_radius: Real,
    #[serde(default)]
    pub hole_spacing: Real,

    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub thickness: Real,

    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: Real,
}

const fn default_spar_count() -> usize {
    2
}

fn default_color() -> String {
    "#88ddff".to_string()
}

const fn default_opacity() -> Real {
    0.9
}

impl Default for WingParameters {
    fn default() -> Self {
        Self {
            airfoil_type: "NACA 2412".to_string(),
            wingspan: 2000.0,
            root_chord: 800.0,
            tip_chord: Some(480.0),
            taper_ratio: 0.6,
            sweep_angle: 0.0,
            dihedral_angle: 0.0,
            n_ribs: 8,
            spar_count: default_spar_count(),
            has_lightening_holes: true,
            hole_radius: 25.0,
            hole_spacing: 150.0,
            material: "Aluminum 2mm".to_string(),
            thickness: 2.0,
            color: default_color(),
            opacity: default_opacity(),
        }
    }
}

impl WingParameters {
    /// The parsed airfoil designator, falling back to NACA 0012.
    pub fn airfoil_code(&self) -> AirfoilCode {
        AirfoilCode::parse(&self.airfoil_type)
    }

    /// Tip chord implied by the taper ratio, `root_chord * taper_ratio`.
    pub fn derived_tip_chord(&self) -> Real {
        self.root_chord * self.taper_ratio
    }

    /// Returns `true` when `tip_chord` is present and agrees with `root_chord * taper_ratio`.
    pub fn has_consistent_tip_chord(&self) -> bool {
        let derived = self.derived_tip_chord();
        self.tip_chord
            .is_some_and(|tip| (tip - derived).abs() <= tolerance() * derived.abs().max(1.0))
    }

    /// Returns a copy whose `tip_chord` equals `root_chord * taper_ratio`.
    ///
    /// The taper ratio is authoritative: a missing or disagreeing tip chord is
    /// recomputed from it.
    pub fn normalized(&self) -> Self {
        let mut params = self.clone();
        params.normalize();
        params
    }

    /// In-place form of [`WingParameters::normalized`].
    pub fn normalize(&mut self) {
        if self.has_consistent_tip_chord() {
            return;
        }
        let derived = self.derived_tip_chord();
        if let Some(previous) = self.tip_chord {
            tracing::warn!(previous, derived, "tip chord disagrees with taper ratio, recomputing");
        }
        self.tip_chord = Some(derived);
    }

    /// Checks the geometric subset against the mesh builder's preconditions.
    pub fn validate(&self) -> Result<(), WingError> {
        finite("wingspan", self.wingspan)?;
        finite("rootChord", self.root_chord)?;
        finite("taperRatio", self.taper_ratio)?;
        finite("sweepAngle", self.sweep_angle)?;
        finite("dihedralAngle", self.dihedral_angle)?;
        if let Some(tip) = self.tip_chord {
            finite("tipChord", tip)?;
        }

        positive("wingspan", self.wingspan)?;
        positive("rootChord", self.root_chord)?;
        positive("taperRatio", self.taper_ratio)?;

        below_right_angle("sweepAngle", self.sweep_angle)?;
        below_right_angle("dihedralAngle", self.dihedral_angle)?;

        check_rib_count(self.n_ribs)
    }

    /// Planform area of the half-wing (trapezoid between root and tip chord).
    pub fn planform_area(&self) -> Real {
        0.5 * (self.root_chord + self.derived_tip_chord()) * self.wingspan
    }

    /// Aspect ratio `span² / area` of the half-wing.
    pub fn aspect_ratio(&self) -> Real {
        self.wingspan * self.wingspan / self.planform_area()
    }

    /// Mean aerodynamic chord of a linearly tapered planform.
    pub fn mean_aerodynamic_chord(&self) -> Real {
        let taper = self.taper_ratio;
        2.0 / 3.0 * self.root_chord * (1.0 + taper + taper * taper) / (1.0 + taper)
    }

    /// `color` (`#rrggbb`) converted to linear RGB, with `opacity` as alpha.
    ///
    /// Returns `None` for anything that is not a 6-digit hex color.
    pub fn base_color(&self) -> Option<[Real; 4]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| -> Option<Real> {
            let srgb = Real::from(u8::from_str_radix(&hex[i..i + 2], 16).ok()?) / 255.0;
            Some(if srgb <= 0.04045 {
                srgb / 12.92
            } else {
                ((srgb + 0.055) / 1.055).powf(2.4)
            })
        };
        Some([channel(0)?, channel(2)?, channel(4)?, self.opacity.clamp(0.0, 1.0)])
    }
}

/// `2 ..= MAX_RIBS`
pub(crate) const fn check_rib_count(n_ribs: usize) -> Result<(), WingError> {
    if n_ribs < 2 {
        Err(WingError::TooFewRibs { n_ribs })
    } else if n_ribs > MAX_RIBS {
        Err(WingError::TooManyRibs { n_ribs })
    } else {
        Ok(())
    }
}

fn finite(name: &'static str, value: Real) -> Result<(), WingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WingError::NonFiniteParameter { name, value })
    }
}

fn positive(name: &'static str, value: Real) -> Result<(), WingError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WingError::NonPositiveParameter { name, value })
    }
}

fn below_right_angle(name: &'static str, degrees: Real) -> Result<(), WingError> {
    if degrees.abs() < 90.0 {
        Ok(())
    } else {
        Err(WingError::AngleOutOfRange { name, degrees })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_satisfy_tip_chord_invariant() {
        let params = WingParameters::default();
        assert!(params.has_consistent_tip_chord());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn normalize_backfills_and_corrects_tip_chord() {
        let mut params = WingParameters {
            tip_chord: None,
            ..WingParameters::default()
        };
        params.normalize();
        assert_eq!(params.tip_chord, Some(480.0));

        params.tip_chord = Some(100.0);
        assert_eq!(params.normalized().tip_chord, Some(480.0));
    }

    #[test]
    fn validate_rejects_degenerate_input() {
        let base = WingParameters::default();

        let err = WingParameters { n_ribs: 1, ..base.clone() }.validate();
        assert_eq!(err, Err(WingError::TooFewRibs { n_ribs: 1 }));

        let err = WingParameters { n_ribs: MAX_RIBS + 1, ..base.clone() }.validate();
        assert_eq!(err, Err(WingError::TooManyRibs { n_ribs: MAX_RIBS + 1 }));
        assert!(WingParameters { n_ribs: MAX_RIBS, ..base.clone() }.validate().is_ok());

        let err = WingParameters { taper_ratio: 0.0, ..base.clone() }.validate();
        assert!(matches!(err, Err(WingError::NonPositiveParameter { name: "taperRatio", .. })));

        let err = WingParameters { wingspan: Real::NAN, ..base.clone() }.validate();
        assert!(matches!(err, Err(WingError::NonFiniteParameter { name: "wingspan", .. })));

        let err = WingParameters { sweep_angle: 90.0, ..base }.validate();
        assert!(matches!(err, Err(WingError::AngleOutOfRange { name: "sweepAngle", .. })));
    }

    #[test]
    fn deserializes_front_end_json_without_tip_chord() {
        let json = r##"{
            "airfoilType": "NACA 4415",
            "wingspan": 3000,
            "rootChord": 1000,
            "taperRatio": 0.5,
            "sweepAngle": 15,
            "dihedralAngle": 3,
            "nRibs": 10
        }"##;
        let params: WingParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.tip_chord, None);
        assert_eq!(params.spar_count, 2);
        assert_eq!(params.color, "#88ddff");
        assert_eq!(params.normalized().tip_chord, Some(500.0));
    }

    #[test]
    fn hex_color_becomes_linear_rgba() {
        let params = WingParameters {
            color: "#ff0000".to_string(),
            opacity: 0.5,
            ..WingParameters::default()
        };
        assert_eq!(params.base_color(), Some([1.0, 0.0, 0.0, 0.5]));

        let named = WingParameters {
            color: "grey".to_string(),
            ..WingParameters::default()
        };
        assert_eq!(named.base_color(), None);
    }

    #[test]
    fn planform_metrics_for_rectangular_wing() {
        let params = WingParameters {
            wingspan: 1000.0,
            root_chord: 200.0,
            taper_ratio: 1.0,
            ..WingParameters::default()
        };
        assert_eq!(params.planform_area(), 200_000.0);
        assert_eq!(params.aspect_ratio(), 5.0);
        assert!((params.mean_aerodynamic_chord() - 200.0).abs() < 1e-9);
    }
}
