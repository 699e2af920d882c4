//! `WingMesh`: flat vertex and triangle buffers produced by the wing builder

use crate::float_types::{Real, parry3d::bounding_volume::Aabb};
use nalgebra::{Point3, Vector3, partial_max, partial_min};

mod query;

/// An indexed triangle mesh.
///
/// Holds no hidden state: everything is derived from `vertices` and
/// `triangles`, and a mesh can always be regenerated from its parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WingMesh {
    pub vertices: Vec<Point3<Real>>,
    /// Counter-clockwise (outward-facing) triangles indexing into `vertices`.
    pub triangles: Vec<[u32; 3]>,
}

impl WingMesh {
    pub const fn new(vertices: Vec<Point3<Real>>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Index buffer flattened to `[a0, b0, c0, a1, ...]`.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Iterator over the corner positions of every triangle.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        self.triangles
            .iter()
            .map(|tri| tri.map(|i| self.vertices[i as usize]))
    }

    /// The opposite half-wing.
    ///
    /// Only the spanwise `z` coordinate is negated so the airfoil keeps its
    /// orientation. Triangle winding is reversed to keep normals outward.
    pub fn mirrored(&self) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|p| Point3::new(p.x, p.y, -p.z))
                .collect(),
            triangles: self.triangles.iter().map(|&[a, b, c]| [a, c, b]).collect(),
        }
    }

    /// Concatenates two meshes, re-basing `other`'s indices.
    pub fn merge(&self, other: &Self) -> Self {
        let offset = self.vertices.len() as u32;
        let mut vertices = Vec::with_capacity(self.vertices.len() + other.vertices.len());
        vertices.extend_from_slice(&self.vertices);
        vertices.extend_from_slice(&other.vertices);

        let mut triangles = Vec::with_capacity(self.triangles.len() + other.triangles.len());
        triangles.extend_from_slice(&self.triangles);
        triangles.extend(other.triangles.iter().map(|tri| tri.map(|i| i + offset)));

        Self::new(vertices, triangles)
    }

    /// Returns a new mesh translated by `offset`.
    pub fn translated(&self, offset: Vector3<Real>) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p + offset).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Returns a new mesh uniformly scaled about the origin, e.g. millimeters
    /// to display units.
    pub fn scaled(&self, factor: Real) -> Self {
        Self {
            vertices: self.vertices.iter().map(|p| p * factor).collect(),
            triangles: self.triangles.clone(),
        }
    }

    /// Unit normal of each triangle. Degenerate triangles get a zero vector.
    pub fn face_normals(&self) -> Vec<Vector3<Real>> {
        self.triangle_positions()
            .map(|[a, b, c]| {
                (b - a)
                    .cross(&(c - a))
                    .try_normalize(Real::EPSILON)
                    .unwrap_or_else(Vector3::zeros)
            })
            .collect()
    }

    /// Per-vertex normals averaged over adjacent faces, weighted by face area.
    ///
    /// Vertices not referenced by any triangle get a zero vector.
    pub fn vertex_normals(&self) -> Vec<Vector3<Real>> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for (tri, [a, b, c]) in self.triangles.iter().zip(self.triangle_positions()) {
            // unnormalized cross product carries twice the face area
            let weighted = (b - a).cross(&(c - a));
            for &i in tri {
                normals[i as usize] += weighted;
            }
        }
        for n in &mut normals {
            *n = n.try_normalize(Real::EPSILON).unwrap_or_else(Vector3::zeros);
        }
        normals
    }

    /// Total surface area.
    pub fn surface_area(&self) -> Real {
        self.triangle_positions()
            .map(|[a, b, c]| 0.5 * (b - a).cross(&(c - a)).norm())
            .sum()
    }

    /// Axis-aligned bounding box of all vertices.
    pub fn bounding_box(&self) -> Aabb {
        let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
        let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);

        for p in &self.vertices {
            mins.x = *partial_min(&mins.x, &p.x).unwrap_or(&mins.x);
            mins.y = *partial_min(&mins.y, &p.y).unwrap_or(&mins.y);
            mins.z = *partial_min(&mins.z, &p.z).unwrap_or(&mins.z);

            maxs.x = *partial_max(&maxs.x, &p.x).unwrap_or(&maxs.x);
            maxs.y = *partial_max(&maxs.y, &p.y).unwrap_or(&maxs.y);
            maxs.z = *partial_max(&maxs.z, &p.z).unwrap_or(&maxs.z);
        }

        // If still uninitialized (e.g., no vertices), return a trivial AABB at origin
        if mins.x > maxs.x {
            return Aabb::new(Point3::origin(), Point3::origin());
        }
        Aabb::new(mins, maxs)
    }
}
