//! Wing mesh construction

use crate::airfoil::sample_closed;
use crate::errors::WingError;
use crate::mesh::WingMesh;
use crate::wing::{WingParameters, rib_stations};
use nalgebra::Point3;

/// Points per rib outline used when no resolution is configured.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Largest accepted points-per-rib count.
pub const MAX_RESOLUTION: usize = 4096;

/// Builds a triangulated skin from a [`WingParameters`] snapshot.
///
/// # Example
/// ```
/// use wingcraft::wing::{WingMeshBuilder, WingParameters};
///
/// let mesh = WingMeshBuilder::new()
///     .resolution(50)
///     .build(&WingParameters::default())
///     .unwrap();
/// assert_eq!(mesh.vertex_count(), 8 * 50);
/// assert_eq!(mesh.triangle_count(), 2 * 7 * 49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WingMeshBuilder {
    resolution: usize,
    mirrored: bool,
}

impl Default for WingMeshBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WingMeshBuilder {
    pub const fn new() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            mirrored: false,
        }
    }

    /// Number of outline points per rib, `2 ..= MAX_RESOLUTION`.
    pub const fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Build the opposite half-wing by negating the span axis.
    pub const fn mirrored(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Generates the mesh for one half-wing.
    ///
    /// The result holds `n_ribs * resolution` vertices and
    /// `2 * (n_ribs - 1) * (resolution - 1)` triangles. Invalid parameters are
    /// rejected before any geometry is produced.
    pub fn build(&self, params: &WingParameters) -> Result<WingMesh, WingError> {
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(WingError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        params.validate()?;

        let outline = sample_closed(params.airfoil_code(), self.resolution);
        let stations = rib_stations(params)?;
        let per_rib = outline.len();
        let vertex_count = stations
            .len()
            .checked_mul(per_rib)
            .filter(|&count| u32::try_from(count).is_ok())
            .ok_or(WingError::MeshTooLarge {
                ribs: stations.len(),
                points_per_rib: per_rib,
            })?;

        let mut vertices: Vec<Point3<_>> = Vec::with_capacity(vertex_count);
        for station in &stations {
            vertices.extend(station.place(&outline));
        }

        let index = |rib: usize, point: usize| (rib * per_rib + point) as u32;
        let mut triangles = Vec::with_capacity(2 * (stations.len() - 1) * (per_rib - 1));
        for i in 0..stations.len() - 1 {
            for j in 0..per_rib - 1 {
                triangles.push([index(i, j), index(i, j + 1), index(i + 1, j + 1)]);
                triangles.push([index(i, j), index(i + 1, j + 1), index(i + 1, j)]);
            }
        }

        let mesh = WingMesh::new(vertices, triangles);
        tracing::debug!(
            airfoil = %outline.code(),
            ribs = stations.len(),
            points_per_rib = per_rib,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            mirrored = self.mirrored,
            "built wing mesh"
        );

        Ok(if self.mirrored { mesh.mirrored() } else { mesh })
    }

    /// Generates both half-wings as one mesh: the configured half followed by
    /// its mirror image.
    pub fn build_full_span(&self, params: &WingParameters) -> Result<WingMesh, WingError> {
        let half = self.mirrored(false).build(params)?;
        let mirror = half.mirrored();
        Ok(half.merge(&mirror))
    }
}

/// Builds one half-wing at [`DEFAULT_RESOLUTION`].
pub fn build(params: &WingParameters) -> Result<WingMesh, WingError> {
    WingMeshBuilder::new().build(params)
}
