//! Rib stations along the span

use crate::airfoil::AirfoilOutline;
use crate::errors::WingError;
use crate::float_types::{Real, deg_to_rad};
use crate::wing::WingParameters;
use crate::wing::params::check_rib_count;
use nalgebra::Point3;

/// One span position of the wing and the transform applied to the shared
/// airfoil outline there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibStation {
    /// Span fraction `t ∈ [0, 1]`, root to tip.
    pub fraction: Real,
    /// Spanwise coordinate, `t * wingspan`.
    pub span_position: Real,
    /// Taper-interpolated chord.
    pub local_chord: Real,
    /// Chordwise shift from sweep.
    pub sweep_offset: Real,
    /// Vertical shift from dihedral.
    pub dihedral_offset: Real,
}

impl RibStation {
    /// Station at span fraction `t` of `params`.
    ///
    /// Sweep is referenced to the root chord rather than the local chord, so
    /// the swept reference line stays straight under taper.
    pub fn at(params: &WingParameters, t: Real) -> Self {
        let taper_factor = 1.0 - (1.0 - params.taper_ratio) * t;
        Self {
            fraction: t,
            span_position: t * params.wingspan,
            local_chord: params.root_chord * taper_factor,
            sweep_offset: t * params.root_chord * deg_to_rad(params.sweep_angle).tan(),
            dihedral_offset: t * params.wingspan * deg_to_rad(params.dihedral_angle).tan(),
        }
    }

    /// Places the airfoil outline at this station. The chordwise axis is `x`,
    /// thickness is `y` and span is `z`.
    pub fn place<'a>(
        &'a self,
        outline: &'a AirfoilOutline,
    ) -> impl Iterator<Item = Point3<Real>> + 'a {
        outline.scaled(self.local_chord).map(move |p| {
            Point3::new(
                p.x + self.sweep_offset,
                p.y + self.dihedral_offset,
                self.span_position,
            )
        })
    }
}

/// Evenly distributed stations from root (`t = 0`) to tip (`t = 1`).
///
/// Fails with [`WingError::TooFewRibs`] when `params.n_ribs < 2` and
/// [`WingError::TooManyRibs`] above [`MAX_RIBS`](crate::wing::MAX_RIBS).
pub fn rib_stations(params: &WingParameters) -> Result<Vec<RibStation>, WingError> {
    check_rib_count(params.n_ribs)?;
    let last = (params.n_ribs - 1) as Real;
    Ok((0..params.n_ribs)
        .map(|i| RibStation::at(params, i as Real / last))
        .collect())
}
