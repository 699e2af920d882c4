//! Spatial queries against a `WingMesh`

use crate::errors::WingError;
use crate::float_types::{
    Real,
    parry3d::{
        query::{Ray, RayCast},
        shape::{TriMesh, Triangle},
    },
    tolerance,
};
use crate::mesh::WingMesh;
use nalgebra::{Isometry3, Point3, Vector3};

impl WingMesh {
    /// Casts a ray against every triangle and returns hit points with their
    /// distance along `direction`, nearest first. Hits closer together than
    /// the crate tolerance are reported once.
    ///
    /// Used to pick a wing under the cursor.
    pub fn ray_intersections(
        &self,
        origin: &Point3<Real>,
        direction: &Vector3<Real>,
    ) -> Vec<(Point3<Real>, Real)> {
        let ray = Ray::new(*origin, *direction);
        let iso = Isometry3::identity();

        let mut hits: Vec<(Point3<Real>, Real)> = self
            .triangle_positions()
            .filter_map(|[a, b, c]| {
                Triangle::new(a, b, c)
                    .cast_ray_and_get_normal(&iso, &ray, Real::MAX, true)
                    .map(|hit| (ray.point_at(hit.time_of_impact), hit.time_of_impact))
            })
            .collect();

        hits.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        hits.dedup_by(|a, b| (a.1 - b.1).abs() < tolerance());
        hits
    }

    /// `true` if the ray meets the mesh anywhere.
    pub fn is_hit_by(&self, origin: &Point3<Real>, direction: &Vector3<Real>) -> bool {
        !self.ray_intersections(origin, direction).is_empty()
    }

    /// Converts the mesh to a parry `TriMesh` for collision or picking.
    ///
    /// ## Errors
    /// If parry rejects the index buffer (e.g. an empty mesh).
    pub fn to_trimesh(&self) -> Result<TriMesh, WingError> {
        Ok(TriMesh::new(self.vertices.clone(), self.triangles.clone())?)
    }
}
