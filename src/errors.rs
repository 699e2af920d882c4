//! Geometry errors

use crate::float_types::Real;

/// All the ways a wing description can be rejected before meshing.
///
/// The geometry core fails fast: a mesh is either built completely from
/// valid parameters or not at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WingError {
    /// (TooFewRibs) A wing needs at least two rib stations to be triangulated
    #[error("(TooFewRibs) a wing needs at least 2 ribs, got {n_ribs}")]
    TooFewRibs { n_ribs: usize },
    /// (TooManyRibs) The rib count exceeds [`MAX_RIBS`](crate::wing::MAX_RIBS)
    #[error("(TooManyRibs) a wing may have at most {max} ribs, got {n_ribs}", max = crate::wing::MAX_RIBS)]
    TooManyRibs { n_ribs: usize },
    /// (InvalidResolution) An airfoil outline needs between two and
    /// [`MAX_RESOLUTION`](crate::wing::MAX_RESOLUTION) points per rib
    #[error(
        "(InvalidResolution) airfoil resolution must lie between 2 and {max}, got {resolution}",
        max = crate::wing::MAX_RESOLUTION
    )]
    InvalidResolution { resolution: usize },
    /// (MeshTooLarge) The vertex count does not fit a `u32` index buffer
    #[error("(MeshTooLarge) {ribs} ribs of {points_per_rib} points overflow a u32 index buffer")]
    MeshTooLarge { ribs: usize, points_per_rib: usize },
    /// (NonFiniteParameter) The parameter is NaN or infinite
    #[error("(NonFiniteParameter) `{name}` is not finite ({value})")]
    NonFiniteParameter { name: &'static str, value: Real },
    /// (NonPositiveParameter) The parameter must be strictly positive
    #[error("(NonPositiveParameter) `{name}` must be greater than zero, got {value}")]
    NonPositiveParameter { name: &'static str, value: Real },
    /// (AngleOutOfRange) Sweep and dihedral must stay strictly within ±90°
    #[error("(AngleOutOfRange) `{name}` must lie strictly between -90 and 90 degrees, got {degrees}")]
    AngleOutOfRange { name: &'static str, degrees: Real },
    /// Indicates an inconsistency while building a parry triangle mesh
    #[error(transparent)]
    TriMesh(#[from] crate::float_types::parry3d::shape::TriMeshBuilderError),
}
